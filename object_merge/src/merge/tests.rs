//! Unit tests for the explicit-stack merge traversal.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

use super::frame::{Frame, Stack};
use super::{MergeError, Merger};

#[fixture]
fn nested_target() -> Value {
    json!({
        "server": {"host": "localhost", "tls": {"enabled": false}},
        "tags": ["a"],
    })
}

#[test]
fn builds_paths_from_live_frames() {
    let empty = Map::new();
    let mut stack = Stack::<&Value>::new(Frame::root(Map::new(), empty.iter()));
    assert_eq!(stack.path_to("a"), "ROOT.a");
    stack.push(Frame::nested("a".to_owned(), Map::new(), empty.iter()));
    stack.push(Frame::nested("b.c".to_owned(), Map::new(), empty.iter()));
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.path_to("d"), "ROOT.a.b.c.d");
}

#[rstest]
fn failed_merge_keeps_partial_nested_progress(mut nested_target: Value) -> Result<()> {
    let source = json!({
        "server": {"port": 443, "tls": {"cert": "x.pem", "enabled": true}},
        "extra": 1,
    });
    let err = Merger::new()
        .overwrite(false)
        .merge(&mut nested_target, [&source])
        .err()
        .ok_or_else(|| anyhow!("expected the tls flag to conflict"))?;
    ensure!(
        err == MergeError::Conflict {
            path: "ROOT.server.tls.enabled".to_owned(),
            source_index: 1,
        },
        "unexpected error {err:?}"
    );
    ensure!(
        nested_target
            == json!({
                "server": {
                    "host": "localhost",
                    "tls": {"enabled": false, "cert": "x.pem"},
                    "port": 443,
                },
                "tags": ["a"],
            }),
        "subtrees must be reattached after a failure: {nested_target}"
    );
    Ok(())
}

#[rstest]
fn descending_preserves_target_key_order(mut nested_target: Value) -> Result<()> {
    Merger::new().merge(&mut nested_target, [json!({"server": {"host": "example.org"}})])?;
    let keys: Vec<&str> = nested_target
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    ensure!(keys == ["server", "tags"], "unexpected key order {keys:?}");
    ensure!(nested_target["server"]["host"] == "example.org");
    Ok(())
}

#[test]
fn borrowed_sources_are_left_untouched() -> Result<()> {
    let mut target = json!({"a": {"x": 1}});
    let source = json!({"a": {"y": {"deep": [1, 2]}}, "b": true});
    let snapshot = source.clone();
    Merger::new().merge(&mut target, [&source])?;
    ensure!(source == snapshot, "source was modified: {source}");
    if let Some(inserted) = target.pointer_mut("/a/y/deep") {
        *inserted = json!("changed");
    }
    ensure!(
        source["a"]["y"]["deep"] == json!([1, 2]),
        "inserted values must not alias the source"
    );
    Ok(())
}

#[test]
fn owned_sources_move_subtrees_into_target() -> Result<()> {
    let mut target = json!({"a": {"x": 1}});
    let sources = vec![json!({"a": {"y": 2}}), json!({"b": {"c": [true]}})];
    Merger::new().merge(&mut target, sources)?;
    ensure!(target == json!({"a": {"x": 1, "y": 2}, "b": {"c": [true]}}));
    Ok(())
}

#[rstest]
#[case::null(json!(null), "null")]
#[case::array(json!([1]), "array")]
#[case::string(json!("s"), "string")]
fn rejects_non_mapping_target(#[case] mut target: Value, #[case] kind: &str) -> Result<()> {
    let snapshot = target.clone();
    let err = Merger::new()
        .merge(&mut target, [&json!({"a": 1})])
        .err()
        .ok_or_else(|| anyhow!("expected a shape error"))?;
    ensure!(
        err.to_string() == format!("merge target must be an object, but found {kind}"),
        "unexpected error {err}"
    );
    ensure!(target == snapshot);
    Ok(())
}

#[test]
fn rejects_non_mapping_source_before_mutating() -> Result<()> {
    let mut target = json!({"a": 1});
    let first = json!({"b": 2});
    let second = json!(42);
    let err = Merger::new()
        .merge(&mut target, [&first, &second])
        .err()
        .ok_or_else(|| anyhow!("expected a shape error"))?;
    ensure!(err.source_index() == Some(2), "unexpected error {err:?}");
    ensure!(target == json!({"a": 1}), "no source may be applied: {target}");
    Ok(())
}

#[test]
fn empty_sources_accept_any_target() -> Result<()> {
    let mut target = json!("leaf");
    Merger::new().merge(&mut target, Vec::<Value>::new())?;
    ensure!(target == json!("leaf"));
    Ok(())
}

/// Build `{"next": {"next": ... {"leaf": leaf}}}` without recursion.
fn chain(depth: usize, leaf: Value) -> Value {
    let mut value = Value::Object(Map::from_iter([("leaf".to_owned(), leaf)]));
    for _ in 0..depth {
        value = Value::Object(Map::from_iter([("next".to_owned(), value)]));
    }
    value
}

/// Walk to the innermost mapping without recursion.
fn innermost(value: &Value) -> (usize, &Value) {
    let mut depth = 0;
    let mut current = value;
    while let Some(next) = current.get("next") {
        depth += 1;
        current = next;
    }
    (depth, current)
}

/// Drop a chain one level at a time; the default drop glue recurses.
fn dismantle(mut value: Value) {
    while let Some(next) = value.as_object_mut().and_then(|map| map.remove("next")) {
        value = next;
    }
}

#[test]
fn merges_nesting_deeper_than_the_call_stack_allows() -> Result<()> {
    const DEPTH: usize = 100_000;
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| -> Result<()> {
            let mut target = chain(DEPTH, json!(1));
            let source = chain(DEPTH, json!(2));
            let outcome = Merger::new().overwrite(false).merge(&mut target, [&source]);
            let expected_path = format!("ROOT{}.leaf", ".next".repeat(DEPTH));
            let matched = matches!(
                &outcome,
                Err(MergeError::Conflict { path, source_index: 1 }) if *path == expected_path
            );
            Merger::new().merge(&mut target, [&source])?;
            let (depth, leaf) = innermost(&target);
            let converged = depth == DEPTH && leaf["leaf"] == 2;
            dismantle(target);
            dismantle(source);
            ensure!(matched, "unexpected outcome at depth {DEPTH}");
            ensure!(converged, "overwrite did not reach the innermost leaf");
            Ok(())
        })?;
    handle
        .join()
        .map_err(|_| anyhow!("merge thread panicked"))?
}
