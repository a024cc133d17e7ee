//! Iterative deep merge of JSON mappings.
//!
//! [`Merger`] folds source mappings into a target one source at a time.
//! For every own key of a source mapping:
//!
//! - keys missing from the target are inserted;
//! - keys holding a mapping on both sides are merged key by key;
//! - any other collision is a conflict. With overwriting enabled the source
//!   value replaces the target value; otherwise the merge stops with
//!   [`MergeError::Conflict`], keeping whatever was merged before it.
//!
//! Arrays are leaves and are never descended into. Traversal runs on an
//! explicit stack, so nesting depth is bounded by memory rather than by the
//! call stack.
//!
//! # Examples
//!
//! ```rust
//! use object_merge::{Merger, MergeError};
//! use serde_json::json;
//!
//! let mut target = json!({"a": {"x": 1}});
//! let first = json!({"a": {"x": 2}});
//! let second = json!({"a": {"y": 3}});
//! Merger::new().merge(&mut target, [&first, &second])?;
//! assert_eq!(target, json!({"a": {"x": 2, "y": 3}}));
//!
//! let err = Merger::new()
//!     .overwrite(false)
//!     .merge(&mut target, [&json!({"a": {"y": 4}})])
//!     .expect_err("peers must not disagree");
//! assert_eq!(err.path(), Some("ROOT.a.y"));
//! # Ok::<_, MergeError>(())
//! ```

mod frame;
mod source;

use std::mem;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{MergeError, MergeResult, ValueKind};

use frame::{Frame, Stack};

pub use frame::ROOT_PATH;
pub use source::MergeSource;

/// Deep merger configured with a conflict policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Merger {
    overwrite: bool,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    /// Create a merger that overwrites conflicting values.
    #[must_use]
    pub const fn new() -> Self {
        Self { overwrite: true }
    }

    /// Choose whether conflicts overwrite the target (`true`) or fail.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Returns `true` when conflicts are resolved by overwriting.
    #[must_use]
    pub const fn overwrites(&self) -> bool {
        self.overwrite
    }

    /// Merge `sources` into `target`, in order.
    ///
    /// Each source is merged completely before the next one starts. An empty
    /// `sources` succeeds without inspecting `target`.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::TargetNotMapping`] or
    /// [`MergeError::SourceNotMapping`] before touching `target` when an input
    /// is not an object, and [`MergeError::Conflict`] when overwriting is
    /// disabled and a key collides. Sources after the conflicting one are not
    /// applied, and mutations made before the conflict are kept.
    pub fn merge<I>(&self, target: &mut Value, sources: I) -> MergeResult<()>
    where
        I: IntoIterator,
        I::Item: MergeSource,
    {
        let collected: Vec<I::Item> = sources.into_iter().collect();
        if collected.is_empty() {
            return Ok(());
        }

        let found = ValueKind::of(target);
        let Value::Object(root) = target else {
            return Err(MergeError::TargetNotMapping { found });
        };
        let pending = collected
            .into_iter()
            .enumerate()
            .map(|(position, source)| {
                source
                    .into_entries()
                    .map_err(|leaf| MergeError::SourceNotMapping {
                        source_index: position + 1,
                        found: ValueKind::of(leaf.as_value()),
                    })
            })
            .collect::<MergeResult<Vec<_>>>()?;

        for (position, entries) in pending.into_iter().enumerate() {
            let source_index = position + 1;
            debug!(
                source = source_index,
                overwrite = self.overwrite,
                "merging source into target"
            );
            self.merge_source::<I::Item>(root, entries, source_index)?;
        }
        Ok(())
    }

    fn merge_source<S: MergeSource>(
        &self,
        root: &mut Map<String, Value>,
        entries: S::Entries,
        source_index: usize,
    ) -> MergeResult<()> {
        let mut stack = Stack::<S>::new(Frame::root(mem::take(root), entries));
        let outcome = self.drain(&mut stack, source_index);
        *root = stack.into_root();
        outcome
    }

    fn drain<S: MergeSource>(
        &self,
        stack: &mut Stack<S>,
        source_index: usize,
    ) -> MergeResult<()> {
        while let Some(frame) = stack.top() {
            let Some((key, value)) = frame.entries.next() else {
                if stack.pop() {
                    continue;
                }
                break;
            };
            match self.visit(frame, key, value) {
                Step::Applied => {}
                Step::Descend(child) => {
                    stack.push(child);
                    trace!(depth = stack.depth(), "descending into nested mapping");
                }
                Step::Rejected(rejected) => {
                    let path = stack.path_to(&rejected);
                    debug!(%path, source = source_index, "rejecting conflicting value");
                    return Err(MergeError::Conflict { path, source_index });
                }
            }
        }
        Ok(())
    }

    /// Apply one source entry to the frame's target.
    fn visit<S: MergeSource>(&self, frame: &mut Frame<S>, key: S::Key, value: S) -> Step<S> {
        let Some(existing) = frame.target.get_mut(key.as_ref()) else {
            trace!(key = key.as_ref(), "inserting key");
            frame.target.insert(key.into(), value.into_value());
            return Step::Applied;
        };
        let Value::Object(nested) = existing else {
            return self.resolve_conflict(existing, key, value);
        };
        match value.into_entries() {
            Ok(entries) => {
                Step::Descend(Frame::nested(key.into(), mem::take(nested), entries))
            }
            Err(leaf) => self.resolve_conflict(existing, key, leaf),
        }
    }

    fn resolve_conflict<S: MergeSource>(
        &self,
        slot: &mut Value,
        key: S::Key,
        incoming: S,
    ) -> Step<S> {
        if !self.overwrite {
            return Step::Rejected(key.into());
        }
        trace!(
            key = key.as_ref(),
            replaced = %ValueKind::of(slot),
            incoming = %ValueKind::of(incoming.as_value()),
            "overwriting conflicting value"
        );
        *slot = incoming.into_value();
        Step::Applied
    }
}

/// Outcome of applying a single source entry.
enum Step<S: MergeSource> {
    /// The entry was inserted or overwrote the target value.
    Applied,
    /// Both sides hold mappings; the frame must be drained first.
    Descend(Frame<S>),
    /// The entry conflicts and overwriting is disabled.
    Rejected(String),
}

/// Merge borrowed `sources` into `target` with the given overwrite policy.
///
/// Values inserted into `target` are cloned, so `sources` are never modified.
///
/// ```rust
/// use object_merge::merge;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1});
/// merge(&mut target, [&json!({"b": 2})], true)?;
/// assert_eq!(target, json!({"a": 1, "b": 2}));
/// # Ok::<_, object_merge::MergeError>(())
/// ```
///
/// # Errors
///
/// See [`Merger::merge`].
pub fn merge<'a, I>(target: &mut Value, sources: I, overwrite: bool) -> MergeResult<()>
where
    I: IntoIterator<Item = &'a Value>,
{
    Merger::new().overwrite(overwrite).merge(target, sources)
}

#[cfg(test)]
mod tests;
