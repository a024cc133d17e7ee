//! Tests for format selection and document decoding.

use std::fs;

use anyhow::{Context, Result, anyhow, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use serde_json::json;

use super::{DocumentFormat, load_document, parse_document};
use crate::LoadError;

fn temp_path(dir: &tempfile::TempDir, name: &str) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(dir.path().join(name))
        .map_err(|path| anyhow!("temp path is not UTF-8: {}", path.display()))
}

#[rstest]
#[case("a.json", Some(DocumentFormat::Json))]
#[case("a.JSON5", Some(DocumentFormat::Json5))]
#[case("a.yaml", Some(DocumentFormat::Yaml))]
#[case("a.yml", Some(DocumentFormat::Yaml))]
#[case("dir/a.toml", Some(DocumentFormat::Toml))]
#[case("a.ini", None)]
#[case("no_extension", None)]
fn selects_format_from_extension(#[case] path: &str, #[case] expected: Option<DocumentFormat>) {
    assert_eq!(DocumentFormat::from_path(Utf8Path::new(path)), expected);
}

#[test]
fn parses_json() -> Result<()> {
    let value = parse_document(Utf8Path::new("x.json"), r#"{"a": {"b": [1, null]}}"#)?;
    ensure!(value == json!({"a": {"b": [1, null]}}));
    Ok(())
}

#[cfg(feature = "toml")]
#[test]
fn parses_toml_with_datetimes_as_strings() -> Result<()> {
    let value = parse_document(
        Utf8Path::new("x.toml"),
        "name = \"svc\"\nstarted = 1979-05-27T07:32:00Z\n[limits]\ncpu = 2\nratio = 0.5\n",
    )?;
    ensure!(
        value
            == json!({
                "name": "svc",
                "started": "1979-05-27T07:32:00Z",
                "limits": {"cpu": 2, "ratio": 0.5},
            }),
        "unexpected document {value}"
    );
    Ok(())
}

#[cfg(feature = "json5")]
#[test]
fn parses_json5() -> Result<()> {
    let value = parse_document(Utf8Path::new("x.json5"), "{a: 'x', // comment\n b: [true,],}")?;
    ensure!(value == json!({"a": "x", "b": [true]}), "unexpected document {value}");
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn parses_yaml() -> Result<()> {
    let value = parse_document(Utf8Path::new("x.yaml"), "a:\n  b: true\n  c: [1, 2]\n")?;
    ensure!(value == json!({"a": {"b": true, "c": [1, 2]}}));
    Ok(())
}

#[cfg(not(feature = "yaml"))]
#[test]
fn reports_disabled_yaml_feature() {
    let err = parse_document(Utf8Path::new("x.yaml"), "a: 1");
    assert!(matches!(
        err,
        Err(LoadError::FeatureDisabled { feature: "yaml", .. })
    ));
}

#[test]
fn rejects_unknown_extension() {
    let err = parse_document(Utf8Path::new("x.ini"), "a=1");
    assert!(matches!(err, Err(LoadError::UnsupportedFormat { .. })));
}

#[test]
fn labels_decode_failures_with_path() -> Result<()> {
    let err = parse_document(Utf8Path::new("broken.json"), "{")
        .err()
        .ok_or_else(|| anyhow!("expected malformed JSON to fail"))?;
    ensure!(err.path().as_str() == "broken.json", "unexpected path {}", err.path());
    ensure!(
        err.to_string().starts_with("document error in 'broken.json'"),
        "unexpected error {err}"
    );
    Ok(())
}

#[test]
fn loads_document_from_disk() -> Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = temp_path(&dir, "settings.json")?;
    fs::write(&path, r#"{"port": 8080}"#).context("write document")?;
    ensure!(load_document(&path)? == json!({"port": 8080}));
    Ok(())
}

#[test]
fn missing_file_reports_io_error() -> Result<()> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = temp_path(&dir, "absent.json")?;
    match load_document(&path) {
        Err(LoadError::File { path: reported, source }) => {
            ensure!(reported == path);
            ensure!(
                source
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound),
                "expected a not-found I/O error, got {source}"
            );
        }
        other => return Err(anyhow!("unexpected outcome {other:?}")),
    }
    Ok(())
}
