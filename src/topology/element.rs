//! Element shape metadata for the output topology.

/// Element shapes expressible in the Blueprint output.
///
/// The converter emits a single unstructured topology of one shape; only
/// quadrilaterals are supported by the input format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ElementShape {
    /// 2D tensor-product cell (quad).
    Quadrilateral,
}

impl ElementShape {
    /// Blueprint shape string for this element.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementShape::Quadrilateral => "quad",
        }
    }

    /// Number of corner nodes per element.
    pub fn node_count(self) -> usize {
        match self {
            ElementShape::Quadrilateral => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_metadata() {
        assert_eq!(ElementShape::Quadrilateral.as_str(), "quad");
        assert_eq!(ElementShape::Quadrilateral.node_count(), 4);
    }
}
