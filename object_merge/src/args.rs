//! Positional-argument entry point for hosts that pass untyped argument lists.
//!
//! Dynamic hosts call the merger as `(target, source_1, [source_2, ...],
//! [overwrite])`. This module applies those marshalling rules on top of
//! [`Merger`].

use serde_json::Value;
use tracing::debug;

use crate::{MergeResult, Merger};

/// Merge positional arguments into the first one.
///
/// - With fewer than two arguments the call does nothing and succeeds.
/// - A trailing [`Value::Bool`] is taken as the overwrite flag (default
///   `true`) and is not treated as a source.
/// - Every other argument after the first is a source, applied in order.
///
/// The target is mutated in place; nothing is returned on success.
///
/// ```rust
/// use object_merge::merge_arguments;
/// use serde_json::json;
///
/// let mut args = [json!({"a": 1}), json!({"a": 2}), json!(false)];
/// let err = merge_arguments(&mut args).expect_err("overwrite was disabled");
/// assert_eq!(
///     err.to_string(),
///     "Confliction has been detected on property ROOT.a when merging the 1th param into the target"
/// );
/// assert_eq!(args[0], json!({"a": 1}));
/// ```
///
/// # Errors
///
/// Propagates any [`crate::MergeError`] raised by [`Merger::merge`].
pub fn merge_arguments(args: &mut [Value]) -> MergeResult<()> {
    let Some((target, rest)) = args.split_first_mut() else {
        return Ok(());
    };
    let (overwrite, sources) = match rest.split_last() {
        None => return Ok(()),
        Some((Value::Bool(flag), leading)) => (*flag, leading),
        Some(_) => (true, &*rest),
    };
    debug!(sources = sources.len(), overwrite, "merging positional arguments");
    Merger::new().overwrite(overwrite).merge(target, sources)
}
