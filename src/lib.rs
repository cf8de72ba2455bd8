//! # mesh-blueprint
//!
//! mesh-blueprint converts ad-hoc rz unstructured-mesh JSON documents (node
//! positions keyed by sparse integer ids, zones referencing those ids) into
//! Conduit-Blueprint-style mesh JSON consumed by visualization and analysis
//! tooling. The core is a single deterministic reindexing pipeline: an
//! ordered coordinate pass, a key-to-index translation table, connectivity
//! remapping, and optional scalar field synthesis.
//!
//! ## Features
//! - Strict and gap-filling policies for non-contiguous node keys
//! - Flat quad connectivity remapped to dense 0-based indices
//! - Optional per-zone synthetic scalar field (element- or legacy
//!   vertex-associated)
//! - Configurable r-coordinate offset transform
//! - Trait-based readers/writers over `std::io::{Read, Write}`
//!
//! ## Determinism
//!
//! Input mapping order is never trusted: keys are parsed to integers and
//! every pass iterates in ascending numeric key order. Output key order is
//! fixed, so converting the same input twice produces byte-identical text.
//!
//! ## Usage
//! ```no_run
//! use mesh_blueprint::prelude::*;
//!
//! # fn main() -> Result<(), mesh_blueprint::mesh_error::MeshBlueprintError> {
//! let input = std::fs::File::open("testmesh.json")?;
//! let document = AdhocJsonReader.read(input)?;
//! let mesh = convert(&document, &ConvertOptions::default())?;
//! let output = std::fs::File::create("blueprint_mesh.json")?;
//! BlueprintJsonWriter.write(output, &mesh)?;
//! # Ok(())
//! # }
//! ```

// Re-export our major subsystems:
pub mod algs;
pub mod data;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::reindex::{
        ConvertOptions, FieldAssociation, GapPolicy, SYNTHETIC_FIELD_NAME, convert,
    };
    pub use crate::data::coordinates::CoordinateValues;
    pub use crate::data::index_map::IndexMap;
    pub use crate::io::adhoc::AdhocJsonReader;
    pub use crate::io::blueprint::{BlueprintJsonWriter, BlueprintMesh};
    pub use crate::io::{BlueprintMeshWriter, MeshDocument, MeshDocumentReader};
    pub use crate::mesh_error::MeshBlueprintError;
    pub use crate::topology::element::ElementShape;
    pub use crate::topology::node::{NodeKey, NodePosition};
    pub use crate::topology::zone::{Zone, ZoneKey};
}
