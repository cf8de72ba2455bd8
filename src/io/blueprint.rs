//! Blueprint mesh document model and JSON writer.
//!
//! The output follows the Conduit Blueprint mesh convention: one explicit
//! `rz` coordset named `coords`, one unstructured quad topology named `mesh`,
//! and optionally named fields. Downstream viewers address the arrays at
//! `coordsets/coords/values/{r,z}`, `topologies/mesh/elements/connectivity`
//! and `fields/<name>/values`, so the structural members (including the
//! `path` strings) are fixed.

use crate::data::coordinates::CoordinateValues;
use crate::io::BlueprintMeshWriter;
use crate::mesh_error::MeshBlueprintError;
use crate::topology::element::ElementShape;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io::Write;

/// Name of the single coordset.
pub const COORDSET_NAME: &str = "coords";
/// Name of the single topology.
pub const TOPOLOGY_NAME: &str = "mesh";
/// Coordinate system identifier for rz meshes.
pub const COORD_SYSTEM: &str = "rz";

/// Complete Blueprint output document.
///
/// Serialization order is the struct-field order and the `fields` map is a
/// `BTreeMap`, so repeated conversions of the same input serialize to
/// byte-identical text.
#[derive(Clone, Debug, Serialize)]
pub struct BlueprintMesh {
    /// Coordinate sets; always exactly one, named `coords`.
    pub coordsets: CoordSets,
    /// Topologies; always exactly one, named `mesh`.
    pub topologies: Topologies,
    /// Named scalar fields; omitted from the output when empty.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Field>,
}

/// Container for the single coordset.
#[derive(Clone, Debug, Serialize)]
pub struct CoordSets {
    /// The `coords` coordset.
    pub coords: CoordSet,
}

/// Explicit rz coordinate set.
#[derive(Clone, Debug, Serialize)]
pub struct CoordSet {
    /// Coordset type; always `explicit`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Coordinate system; always `rz`.
    pub system: &'static str,
    /// Blueprint tree path of this coordset.
    pub path: &'static str,
    /// The paired coordinate arrays.
    pub values: CoordinateValues,
}

/// Container for the single topology.
#[derive(Clone, Debug, Serialize)]
pub struct Topologies {
    /// The `mesh` topology.
    pub mesh: Topology,
}

/// Unstructured topology over the `coords` coordset.
#[derive(Clone, Debug, Serialize)]
pub struct Topology {
    /// Topology type; always `unstructured`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Name of the coordset the connectivity indexes into.
    pub coordset: &'static str,
    /// Blueprint tree path of this topology.
    pub path: &'static str,
    /// Element shape and connectivity.
    pub elements: Elements,
}

/// Element block of the topology.
#[derive(Clone, Debug, Serialize)]
pub struct Elements {
    /// Element shape string (`quad`).
    pub shape: &'static str,
    /// Flat 0-based connectivity, four indices per element.
    pub connectivity: Vec<u64>,
}

/// A named scalar field attached to the topology.
#[derive(Clone, Debug, Serialize)]
pub struct Field {
    /// Declared association (`element` or `vertex`).
    pub association: &'static str,
    /// Topology the field is attached to.
    pub topology: &'static str,
    /// One value per associated entity.
    pub values: Vec<f64>,
}

impl BlueprintMesh {
    /// Assemble a document from the computed arrays; no fields attached.
    pub fn new(values: CoordinateValues, connectivity: Vec<u64>) -> Self {
        Self {
            coordsets: CoordSets {
                coords: CoordSet {
                    kind: "explicit",
                    system: COORD_SYSTEM,
                    path: "coordsets/coords",
                    values,
                },
            },
            topologies: Topologies {
                mesh: Topology {
                    kind: "unstructured",
                    coordset: COORDSET_NAME,
                    path: "topologies/mesh",
                    elements: Elements {
                        shape: ElementShape::Quadrilateral.as_str(),
                        connectivity,
                    },
                },
            },
            fields: BTreeMap::new(),
        }
    }

    /// Attach a named scalar field.
    pub fn insert_field(&mut self, name: &str, association: &'static str, values: Vec<f64>) {
        self.fields.insert(
            name.to_string(),
            Field {
                association,
                topology: TOPOLOGY_NAME,
                values,
            },
        );
    }

    /// Number of output nodes (length of the coordinate arrays).
    pub fn vertex_count(&self) -> usize {
        self.coordsets.coords.values.len()
    }

    /// Number of output elements.
    pub fn element_count(&self) -> usize {
        self.topologies.mesh.elements.connectivity.len()
            / ElementShape::Quadrilateral.node_count()
    }
}

/// Pretty-printing JSON writer for [`BlueprintMesh`] documents.
///
/// Emits four-space indentation, matching what the downstream viewers were
/// originally fed.
#[derive(Debug, Default, Clone)]
pub struct BlueprintJsonWriter;

impl BlueprintMeshWriter for BlueprintJsonWriter {
    fn write<W: Write>(&self, writer: W, mesh: &BlueprintMesh) -> Result<(), MeshBlueprintError> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        mesh.serialize(&mut serializer)?;
        Ok(())
    }
}
