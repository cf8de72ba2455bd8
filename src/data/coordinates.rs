//! Paired coordinate arrays for the output coordset.
//!
//! The output stores positions as two parallel arrays `r` and `z`; the pair
//! at index `i` is the position of output node `i`. The arrays grow together;
//! equal length is an invariant.

use crate::topology::node::NodePosition;

/// Sentinel position emitted for gap-filled placeholder slots.
///
/// A fixed out-of-range marker pair; never offset or otherwise transformed.
pub const PLACEHOLDER_POSITION: NodePosition = NodePosition::new(-1.0, -1.0);

/// Parallel `r`/`z` value arrays, built by the ordered coordinate pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CoordinateValues {
    /// Radial coordinates, one per output node.
    pub r: Vec<f64>,
    /// Axial coordinates, one per output node.
    pub z: Vec<f64>,
}

impl CoordinateValues {
    /// Creates empty arrays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty arrays with room for `n` positions.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            r: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    /// Appends one position, returning its output index.
    pub fn push(&mut self, pos: NodePosition) -> usize {
        let idx = self.r.len();
        self.r.push(pos.r);
        self.z.push(pos.z);
        idx
    }

    /// Appends one placeholder slot, returning its output index.
    pub fn push_placeholder(&mut self) -> usize {
        self.push(PLACEHOLDER_POSITION)
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.r.len(), self.z.len());
        self.r.len()
    }

    /// Returns `true` when no positions are stored.
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_running_index() {
        let mut values = CoordinateValues::new();
        assert_eq!(values.push(NodePosition::new(1.0, 2.0)), 0);
        assert_eq!(values.push(NodePosition::new(3.0, 4.0)), 1);
        assert_eq!(values.len(), 2);
        assert_eq!(values.r, vec![1.0, 3.0]);
        assert_eq!(values.z, vec![2.0, 4.0]);
    }

    #[test]
    fn placeholder_is_sentinel_pair() {
        let mut values = CoordinateValues::new();
        values.push_placeholder();
        assert_eq!(values.r, vec![-1.0]);
        assert_eq!(values.z, vec![-1.0]);
    }

    #[test]
    fn arrays_stay_equal_length() {
        let mut values = CoordinateValues::with_capacity(3);
        values.push(NodePosition::new(0.0, 0.0));
        values.push_placeholder();
        values.push(NodePosition::new(5.0, 5.0));
        assert_eq!(values.r.len(), values.z.len());
    }

    #[test]
    fn serializes_as_named_arrays() {
        let mut values = CoordinateValues::new();
        values.push(NodePosition::new(1.0, 2.0));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["r"], serde_json::json!([1.0]));
        assert_eq!(json["z"], serde_json::json!([2.0]));
    }
}
