//! IndexMap: translation table from source node keys to dense output indices.
//!
//! The table is built once during the ordered coordinate pass and is
//! read-only afterwards. Placeholder slots created by the gap-fill policy
//! consume output indices but never appear here, so any zone reference that
//! lands in a gap is unresolvable by construction.

use crate::topology::node::NodeKey;
use std::collections::HashMap;

/// Mapping from original node key to 0-based position in the output
/// coordinate arrays.
///
/// # Invariants
/// - Each key appears at most once; re-inserting a key is a caller bug and
///   is surfaced, never silently overwritten.
/// - Indices are assigned by the coordinate pass in ascending key order and
///   are unique.
#[derive(Clone, Debug, Default)]
pub struct IndexMap {
    map: HashMap<NodeKey, usize>,
}

impl IndexMap {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            map: HashMap::with_capacity(n),
        }
    }

    /// Records that `key` lives at output position `index`.
    ///
    /// Returns the previous index if `key` was already present; the caller
    /// treats that as a duplicate-key failure.
    pub fn insert(&mut self, key: NodeKey, index: usize) -> Option<usize> {
        self.map.insert(key, index)
    }

    /// Looks up the output index for `key`.
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<usize> {
        self.map.get(&key).copied()
    }

    /// Returns true iff `key` has a translation entry.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.map.contains_key(&key)
    }

    /// Number of translated keys (placeholder slots excluded).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` when no keys are translated.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
