//! Priority-grouped merging of named layers.
//!
//! A [`Hierarchy`] holds named mappings that include one another. A layer's
//! priority is its distance from the layers that include nothing: a layer
//! without includes has priority 0, otherwise its priority is one more than
//! the highest priority among its includes.
//!
//! Layers sharing a priority are peers. They are merged together with
//! overwriting disabled, so any disagreement between peers is reported as a
//! [`HierarchyError::Conflict`]. The per-priority results are then applied in
//! ascending priority with overwriting enabled, letting more specific layers
//! override the layers they build on.
//!
//! # Examples
//!
//! ```rust
//! use object_merge::{Hierarchy, HierarchyError};
//! use serde_json::json;
//!
//! let mut hierarchy = Hierarchy::new();
//! hierarchy.push_root("base", json!({"port": 80, "tls": false}))?;
//! hierarchy.push("web", ["base"], json!({"port": 443}))?;
//! hierarchy.push("secure", ["base"], json!({"tls": true}))?;
//! let merged = hierarchy.merge()?;
//! assert_eq!(merged, json!({"port": 443, "tls": true}));
//! # Ok::<_, HierarchyError>(())
//! ```

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{HierarchyError, Merger, ValueKind};

/// A named mapping positioned within a [`Hierarchy`].
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    name: String,
    includes: Vec<String>,
    priority: usize,
    value: Value,
}

impl Layer {
    /// Name the layer was pushed under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the layers this one builds on.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Distance from the layers that include nothing.
    #[must_use]
    pub const fn priority(&self) -> usize {
        self.priority
    }

    /// Mapping contributed by the layer.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Ordered collection of layers awaiting a priority-grouped merge.
#[derive(Debug, Default)]
pub struct Hierarchy {
    layers: Vec<Layer>,
    priorities: BTreeMap<String, usize>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layers: Vec::new(),
            priorities: BTreeMap::new(),
        }
    }

    /// Create a hierarchy with room for `capacity` layers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
            priorities: BTreeMap::new(),
        }
    }

    /// Append a layer and return its priority.
    ///
    /// Includes must name layers that were pushed earlier, so the include
    /// graph cannot contain cycles.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::DuplicateLayer`] when `name` is taken,
    /// [`HierarchyError::NotMapping`] when `value` is not an object and
    /// [`HierarchyError::UnknownInclude`] when an include has not been pushed.
    pub fn push<N, I, S>(
        &mut self,
        name: N,
        includes: I,
        value: Value,
    ) -> Result<usize, HierarchyError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layer_name: String = name.into();
        if self.priorities.contains_key(&layer_name) {
            return Err(HierarchyError::DuplicateLayer { name: layer_name });
        }
        let found = ValueKind::of(&value);
        if !found.is_mapping() {
            return Err(HierarchyError::NotMapping {
                layer: layer_name,
                found,
            });
        }
        let parents: Vec<String> = includes.into_iter().map(Into::into).collect();
        let mut priority = 0;
        for parent in &parents {
            let Some(&parent_priority) = self.priorities.get(parent) else {
                return Err(HierarchyError::UnknownInclude {
                    layer: layer_name,
                    include: parent.clone(),
                });
            };
            priority = priority.max(parent_priority + 1);
        }
        debug!(layer = %layer_name, priority, "registered layer");
        self.priorities.insert(layer_name.clone(), priority);
        self.layers.push(Layer {
            name: layer_name,
            includes: parents,
            priority,
            value,
        });
        Ok(priority)
    }

    /// Append a layer that includes nothing. Its priority is always 0.
    ///
    /// # Errors
    ///
    /// See [`Hierarchy::push`].
    pub fn push_root<N: Into<String>>(
        &mut self,
        name: N,
        value: Value,
    ) -> Result<usize, HierarchyError> {
        self.push(name, std::iter::empty::<String>(), value)
    }

    /// Layers in push order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names with their priorities, in push order.
    pub fn priorities(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.layers
            .iter()
            .map(|layer| (layer.name.as_str(), layer.priority))
    }

    /// Priority assigned to `name`, if it has been pushed.
    #[must_use]
    pub fn priority_of(&self, name: &str) -> Option<usize> {
        self.priorities.get(name).copied()
    }

    /// Number of layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layers have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Merge every layer into a single mapping.
    ///
    /// An empty hierarchy yields an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Conflict`] when two layers of equal priority
    /// disagree on a value.
    pub fn merge(self) -> Result<Value, HierarchyError> {
        let mut groups: BTreeMap<usize, Vec<Layer>> = BTreeMap::new();
        for layer in self.layers {
            groups.entry(layer.priority).or_default().push(layer);
        }

        let peers = Merger::new().overwrite(false);
        let overriding = Merger::new();
        let mut merged = Value::Object(Map::new());
        for (priority, group) in groups {
            debug!(priority, layers = group.len(), "merging priority group");
            let mut intermediate = Value::Object(Map::new());
            for layer in group {
                peers
                    .merge(&mut intermediate, [layer.value])
                    .map_err(|source| HierarchyError::Conflict {
                        layer: layer.name,
                        priority,
                        source,
                    })?;
            }
            overriding.merge(&mut merged, [intermediate])?;
        }
        Ok(merged)
    }
}
