//! Topological entities of the source mesh: nodes, zones, element shapes.

pub mod element;
pub mod node;
pub mod zone;
