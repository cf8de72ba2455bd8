//! Zone records: quadrilateral elements referencing source node keys.

use crate::topology::node::NodeKey;
use std::fmt;

/// Identifier of a source mesh zone.
///
/// Zone keys are plain integers with no contiguity requirement; connectivity
/// assembly visits zones in ascending key order.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ZoneKey(i64);

impl ZoneKey {
    /// Creates a new `ZoneKey` from a raw `i64` value.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        ZoneKey(raw)
    }

    /// Returns the inner `i64` value of this `ZoneKey`.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ZoneKey {
    fn from(raw: i64) -> Self {
        ZoneKey(raw)
    }
}

impl fmt::Debug for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZoneKey").field(&self.get()).finish()
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A single zone: the ordered corner node references of one quadrilateral.
///
/// The within-zone order of `nids` is preserved verbatim when the
/// connectivity array is assembled.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Zone {
    /// Corner node keys, in element-local order.
    pub nids: Vec<NodeKey>,
}

impl Zone {
    /// Construct a zone from its corner references.
    pub fn new(nids: Vec<NodeKey>) -> Self {
        Self { nids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_key_display() {
        assert_eq!(format!("{}", ZoneKey::new(-3)), "-3");
        assert_eq!(format!("{:?}", ZoneKey::new(5)), "ZoneKey(5)");
    }

    #[test]
    fn zone_deserializes_nids() {
        let z: Zone = serde_json::from_str(r#"{"nids":[4,5,9,8]}"#).unwrap();
        assert_eq!(
            z.nids,
            vec![
                NodeKey::new(4),
                NodeKey::new(5),
                NodeKey::new(9),
                NodeKey::new(8)
            ]
        );
    }

    #[test]
    fn zone_preserves_reference_order() {
        let nids = vec![NodeKey::new(7), NodeKey::new(5), NodeKey::new(7)];
        let z = Zone::new(nids.clone());
        assert_eq!(z.nids, nids);
    }
}
