//! Work frames and the explicit stack driving a merge pass.

use serde_json::{Map, Value};

use super::MergeSource;

/// Sentinel naming the root of every merge path.
pub const ROOT_PATH: &str = "ROOT";

/// One pending descent into a nested mapping.
///
/// The frame owns the target subtree it is filling. The subtree is taken out
/// of its parent when the frame is pushed and written back when it is popped,
/// so no two frames ever hold the same mapping.
pub(super) struct Frame<S: MergeSource> {
    key: Option<String>,
    pub(super) target: Map<String, Value>,
    pub(super) entries: S::Entries,
}

impl<S: MergeSource> Frame<S> {
    pub(super) const fn root(target: Map<String, Value>, entries: S::Entries) -> Self {
        Self {
            key: None,
            target,
            entries,
        }
    }

    pub(super) const fn nested(
        key: String,
        target: Map<String, Value>,
        entries: S::Entries,
    ) -> Self {
        Self {
            key: Some(key),
            target,
            entries,
        }
    }
}

/// LIFO work-list for a single source.
///
/// The root frame is never removed by [`Stack::pop`]; [`Stack::into_root`]
/// reclaims it.
pub(super) struct Stack<S: MergeSource> {
    frames: Vec<Frame<S>>,
}

impl<S: MergeSource> Stack<S> {
    pub(super) fn new(root: Frame<S>) -> Self {
        Self { frames: vec![root] }
    }

    pub(super) fn top(&mut self) -> Option<&mut Frame<S>> {
        self.frames.last_mut()
    }

    pub(super) fn push(&mut self, frame: Frame<S>) {
        self.frames.push(frame);
    }

    pub(super) const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Dotted path from `ROOT` through every live frame to `key`.
    pub(super) fn path_to(&self, key: &str) -> String {
        let mut path = String::from(ROOT_PATH);
        for segment in self.frames.iter().filter_map(|frame| frame.key.as_deref()) {
            path.push('.');
            path.push_str(segment);
        }
        path.push('.');
        path.push_str(key);
        path
    }

    /// Pop a drained frame and write its subtree back into the parent.
    ///
    /// Returns `false`, leaving the stack untouched, when only the root frame
    /// remains.
    pub(super) fn pop(&mut self) -> bool {
        if self.frames.len() < 2 {
            return false;
        }
        let Some(done) = self.frames.pop() else {
            return false;
        };
        if let (Some(parent), Some(key)) = (self.frames.last_mut(), done.key)
            && let Some(slot) = parent.target.get_mut(&key)
        {
            *slot = Value::Object(done.target);
        }
        true
    }

    /// Unwind every frame and return the root mapping.
    ///
    /// Frames still on the stack after a failure are folded back into their
    /// parents, so the mutations applied before the failure are kept.
    pub(super) fn into_root(mut self) -> Map<String, Value> {
        while self.pop() {}
        self.frames
            .pop()
            .map(|root| root.target)
            .unwrap_or_default()
    }
}
