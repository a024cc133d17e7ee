//! Format-specific decoding of mapping documents.

use camino::Utf8Path;
use serde_json::Value;

use crate::LoadError;

#[cfg(any(not(feature = "json5"), not(feature = "yaml"), not(feature = "toml")))]
use super::error::feature_disabled;
use super::error::{file_error, unsupported_format};

/// Document encodings recognised by [`parse_document`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.json5`, requires the `json5` feature.
    Json5,
    /// `.yaml` or `.yml`, requires the `yaml` feature.
    Yaml,
    /// `.toml`, requires the `toml` feature (enabled by default).
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the extension of `path`, ignoring ASCII case.
    ///
    /// ```rust
    /// use camino::Utf8Path;
    /// use object_merge::DocumentFormat;
    ///
    /// assert_eq!(
    ///     DocumentFormat::from_path(Utf8Path::new("app.YML")),
    ///     Some(DocumentFormat::Yaml)
    /// );
    /// assert_eq!(DocumentFormat::from_path(Utf8Path::new("app.ini")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let ext = path.extension().map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Some(Self::Json),
            Some("json5") => Some(Self::Json5),
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Decode `data` according to the extension of `path`.
///
/// `path` is only used to select the decoder and to label errors.
///
/// ```rust
/// use camino::Utf8Path;
/// use object_merge::parse_document;
/// use serde_json::json;
///
/// let value = parse_document(Utf8Path::new("inline.json"), r#"{"a": [1, 2]}"#)?;
/// assert_eq!(value, json!({"a": [1, 2]}));
/// # Ok::<_, object_merge::LoadError>(())
/// ```
///
/// # Errors
///
/// Returns a [`LoadError`] when the extension is unknown, the matching
/// feature is disabled, or the contents fail to decode.
pub fn parse_document(path: &Utf8Path, data: &str) -> Result<Value, LoadError> {
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Json) => serde_json::from_str(data).map_err(|e| file_error(path, e)),
        Some(DocumentFormat::Json5) => parse_json5(path, data),
        Some(DocumentFormat::Yaml) => parse_yaml(path, data),
        Some(DocumentFormat::Toml) => parse_toml(path, data),
        None => Err(unsupported_format(path)),
    }
}

#[cfg(feature = "json5")]
fn parse_json5(path: &Utf8Path, data: &str) -> Result<Value, LoadError> {
    json5::from_str(data).map_err(|e| file_error(path, e))
}

#[cfg(not(feature = "json5"))]
fn parse_json5(path: &Utf8Path, _data: &str) -> Result<Value, LoadError> {
    Err(feature_disabled(path, "json5"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, data: &str) -> Result<Value, LoadError> {
    serde_saphyr::from_str_with_options(
        data,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|e| file_error(path, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _data: &str) -> Result<Value, LoadError> {
    Err(feature_disabled(path, "yaml"))
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, data: &str) -> Result<Value, LoadError> {
    let table: toml::Table = toml::from_str(data).map_err(|e| file_error(path, e))?;
    Ok(toml_to_json(toml::Value::Table(table)))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _data: &str) -> Result<Value, LoadError> {
    Err(feature_disabled(path, "toml"))
}

/// Convert TOML into JSON, rendering datetimes as RFC 3339 strings.
///
/// Non-finite floats have no JSON form and become `null`.
#[cfg(feature = "toml")]
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => {
            serde_json::Number::from_f64(number).map_or(Value::Null, Value::Number)
        }
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
    }
}
