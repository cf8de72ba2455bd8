//! Reindexing pipeline: sparse node keys to a dense Blueprint mesh.
//!
//! The conversion is one deterministic pass, parameterized by
//! [`ConvertOptions`]:
//!
//! 1. Visit node records in ascending key order, building the output
//!    coordinate arrays and the key-to-index translation table under the
//!    selected [`GapPolicy`].
//! 2. Visit zone records in ascending key order, translating every corner
//!    reference through the table into one flat connectivity array.
//! 3. Optionally synthesize a per-zone scalar field.
//! 4. Assemble the [`BlueprintMesh`] document.
//!
//! Any failure aborts the whole conversion; partial output is never produced.

use crate::data::coordinates::CoordinateValues;
use crate::data::index_map::IndexMap;
use crate::io::MeshDocument;
use crate::io::blueprint::BlueprintMesh;
use crate::mesh_error::MeshBlueprintError;
use crate::topology::element::ElementShape;
use crate::topology::node::{NodeKey, NodePosition};
use crate::topology::zone::{Zone, ZoneKey};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Name of the synthesized scalar field.
pub const SYNTHETIC_FIELD_NAME: &str = "zone_id";

/// How the coordinate pass treats gaps in the node key sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GapPolicy {
    /// Keys must be contiguous starting at the first (smallest) key; any gap
    /// fails with [`MeshBlueprintError::NonMonotonicKey`]. Keys map to a
    /// running output index 0, 1, 2, …
    Strict,
    /// Gaps (including a leading gap before key 0) are filled with sentinel
    /// placeholder positions. Placeholders consume output indices but never
    /// enter the translation table, so a real key maps to an output index
    /// equal to its own numeric value.
    Fill,
}

/// Declared association of the synthesized field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldAssociation {
    /// One value per element; count matches the declaration.
    Element,
    /// Legacy variant: declared per-vertex while still carrying one value
    /// per zone. Kept for schema compatibility with existing consumers and
    /// flagged with a warning when selected.
    Vertex,
}

impl FieldAssociation {
    /// Blueprint association string.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldAssociation::Element => "element",
            FieldAssociation::Vertex => "vertex",
        }
    }
}

/// Configuration of one conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Gap handling for the coordinate pass.
    pub gap_policy: GapPolicy,
    /// Synthetic field association; `None` emits no field.
    pub field: Option<FieldAssociation>,
    /// Subtracted from every real node's r-coordinate before output.
    /// Placeholder positions are never offset.
    pub r_offset: f64,
}

impl Default for ConvertOptions {
    /// Gap filling, no field, no offset: the original converter's behavior.
    fn default() -> Self {
        Self {
            gap_policy: GapPolicy::Fill,
            field: None,
            r_offset: 0.0,
        }
    }
}

/// Convert a parsed input document into a Blueprint mesh document.
pub fn convert(
    document: &MeshDocument,
    options: &ConvertOptions,
) -> Result<BlueprintMesh, MeshBlueprintError> {
    let (values, table) = build_coordinates(&document.nodes, options.gap_policy, options.r_offset)?;
    let connectivity = remap_connectivity(&document.zones, &table)?;
    let mut mesh = BlueprintMesh::new(values, connectivity);
    if let Some(association) = options.field {
        if association == FieldAssociation::Vertex {
            log::warn!(
                "field `{SYNTHETIC_FIELD_NAME}` is declared vertex-associated but carries one \
                 value per zone; kept for legacy schema compatibility"
            );
        }
        mesh.insert_field(
            SYNTHETIC_FIELD_NAME,
            association.as_str(),
            synthesize_field(document.zone_count()),
        );
    }
    Ok(mesh)
}

/// Ordered coordinate pass: build the output arrays and the translation
/// table by visiting nodes in ascending key order.
pub fn build_coordinates(
    nodes: &BTreeMap<NodeKey, NodePosition>,
    policy: GapPolicy,
    r_offset: f64,
) -> Result<(CoordinateValues, IndexMap), MeshBlueprintError> {
    let mut values = CoordinateValues::with_capacity(nodes.len());
    let mut table = IndexMap::with_capacity(nodes.len());

    match policy {
        GapPolicy::Strict => {
            let mut expected: Option<u64> = None;
            for (&key, &pos) in nodes {
                if let Some(want) = expected {
                    if key.get() != want {
                        return Err(MeshBlueprintError::NonMonotonicKey {
                            expected: want,
                            found: key,
                        });
                    }
                }
                let index = values.push(apply_offset(pos, r_offset));
                table.insert(key, index);
                expected = Some(key.get() + 1);
            }
        }
        GapPolicy::Fill => {
            let mut next: u64 = 0;
            for (&key, &pos) in nodes {
                while next < key.get() {
                    values.push_placeholder();
                    next += 1;
                }
                let index = values.push(apply_offset(pos, r_offset));
                table.insert(key, index);
                next = key.get() + 1;
            }
            let placeholders = values.len() - nodes.len();
            if placeholders > 0 {
                log::debug!("filled {placeholders} gap slot(s) with placeholder positions");
            }
        }
    }

    Ok((values, table))
}

/// Translate every zone's corner references through the table, in ascending
/// zone key order, into one flat connectivity array.
pub fn remap_connectivity(
    zones: &BTreeMap<ZoneKey, Zone>,
    table: &IndexMap,
) -> Result<Vec<u64>, MeshBlueprintError> {
    let shape = ElementShape::Quadrilateral;
    let mut connectivity = Vec::with_capacity(zones.len() * shape.node_count());
    for (&zone, record) in zones {
        if record.nids.len() != shape.node_count() {
            return Err(MeshBlueprintError::MalformedInput(format!(
                "zone `{zone}` has {} node references, {} topology requires {}",
                record.nids.len(),
                shape.as_str(),
                shape.node_count()
            )));
        }
        for &node in &record.nids {
            let index = table
                .get(node)
                .ok_or(MeshBlueprintError::DanglingReference { zone, node })?;
            connectivity.push(index as u64);
        }
    }
    Ok(connectivity)
}

/// One value per visited zone: the zone's ordinal position as a real number.
pub fn synthesize_field(zone_count: usize) -> Vec<f64> {
    (0..zone_count).map(|ordinal| ordinal as f64).collect_vec()
}

fn apply_offset(pos: NodePosition, r_offset: f64) -> NodePosition {
    NodePosition::new(pos.r - r_offset, pos.z)
}
