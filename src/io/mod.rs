//! Mesh I/O for the ad-hoc input format and the Blueprint output format.
//!
//! This module provides trait-based readers and writers so the conversion
//! core stays independent of files and byte streams: the reader produces a
//! [`MeshDocument`], the writer consumes a
//! [`BlueprintMesh`](crate::io::blueprint::BlueprintMesh).

pub mod adhoc;
pub mod blueprint;

use crate::io::blueprint::BlueprintMesh;
use crate::mesh_error::MeshBlueprintError;
use crate::topology::node::{NodeKey, NodePosition};
use crate::topology::zone::{Zone, ZoneKey};
use std::collections::BTreeMap;
use std::io::{Read, Write};

/// Parsed input document: node positions and zone connectivity.
///
/// Both collections are `BTreeMap`s keyed by the parsed integer keys, so
/// every pass that iterates them visits records in ascending numeric key
/// order. The textual key order of the source mapping is never trusted.
#[derive(Clone, Debug, Default)]
pub struct MeshDocument {
    /// Node positions keyed by source node key.
    pub nodes: BTreeMap<NodeKey, NodePosition>,
    /// Zone records keyed by source zone key.
    pub zones: BTreeMap<ZoneKey, Zone>,
}

impl MeshDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of source zones.
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }
}

/// Trait for readers that parse a raw mesh document.
pub trait MeshDocumentReader {
    /// Parse a mesh document from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<MeshDocument, MeshBlueprintError>;
}

/// Trait for writers that serialize a Blueprint mesh document.
pub trait BlueprintMeshWriter {
    /// Write the document to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &BlueprintMesh) -> Result<(), MeshBlueprintError>;
}
