//! `NodeKey`: a strong, zero-cost handle for source mesh nodes
//!
//! The ad-hoc input format identifies every node by a non-negative integer
//! key. Keys are unique but not necessarily contiguous: the sequence may
//! contain gaps, and key `0` is perfectly valid. `NodeKey` wraps a `u64`
//! so node identifiers cannot be confused with the dense 0-based output
//! indices the conversion produces.
//!
//! This module provides:
//! - A transparent `NodeKey` newtype around `u64` with zero-cost layout
//!   guarantees.
//! - Implementations of common traits (`Debug`, `Display`, ordering,
//!   hashing, serde) so `NodeKey` can be used in maps, sets, and printed
//!   easily.

use std::fmt;

/// Identifier of a source mesh node.
///
/// # Memory layout
/// This type is `repr(transparent)`, meaning it has the same ABI and
/// alignment as its single field (`u64`).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct NodeKey(u64);

impl NodeKey {
    /// Creates a new `NodeKey` from a raw `u64` value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeKey(raw)
    }

    /// Returns the inner `u64` value of this `NodeKey`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeKey {
    fn from(raw: u64) -> Self {
        NodeKey(raw)
    }
}

/// Custom `Debug` implementation to display as `NodeKey(raw_value)`.
impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeKey").field(&self.get()).finish()
    }
}

/// Custom `Display` implementation to print only the raw integer.
impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Position of a node in the rz plane.
///
/// Values pass through the conversion as IEEE doubles; the library does not
/// validate finiteness.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodePosition {
    /// Radial coordinate.
    pub r: f64,
    /// Axial coordinate.
    pub z: f64,
}

impl NodePosition {
    /// Construct a position from its two components.
    #[inline]
    pub const fn new(r: f64, z: f64) -> Self {
        Self { r, z }
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `NodeKey` has the same size as `u64`.
    use super::*;
    use static_assertions::assert_eq_size;

    // If this fails, our repr(transparent) guarantee is broken!
    assert_eq_size!(NodeKey, u64);
}


#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let k = NodeKey::new(123);
        let s = serde_json::to_string(&k).unwrap();
        // Transparent: serializes as the bare integer.
        assert_eq!(s, "123");
        let k2: NodeKey = serde_json::from_str(&s).unwrap();
        assert_eq!(k2, k);
    }

    #[test]
    fn bincode_roundtrip() {
        let k = NodeKey::new(456);
        let bytes = bincode::serialize(&k).unwrap();
        let k2: NodeKey = bincode::deserialize(&bytes).unwrap();
        assert_eq!(k2, k);
    }

    #[test]
    fn position_json_roundtrip() {
        let p = NodePosition::new(1.5, -2.0);
        let s = serde_json::to_string(&p).unwrap();
        let p2: NodePosition = serde_json::from_str(&s).unwrap();
        assert_eq!(p2, p);
    }
}
