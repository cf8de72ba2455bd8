//! Reader for the ad-hoc mesh JSON format.
//!
//! # Supported format
//! A JSON object with two top-level mappings:
//! - `coord`: string-encoded integer node key -> `{ "pos": { "r": f64, "z": f64 } }`
//! - `zones`: string-encoded integer zone key -> `{ "nids": [node keys...] }`
//!
//! Keys are parsed to integers up front and stored in ordered maps; the
//! textual order of the source mappings carries no meaning. No further
//! schema validation is performed beyond what reindexing needs.

use crate::io::{MeshDocument, MeshDocumentReader};
use crate::mesh_error::MeshBlueprintError;
use crate::topology::node::{NodeKey, NodePosition};
use crate::topology::zone::{Zone, ZoneKey};
use serde_json::{Map, Value};
use std::io::Read;

/// Reader for the ad-hoc node/zone JSON documents.
#[derive(Debug, Default, Clone)]
pub struct AdhocJsonReader;

/// Per-node record shape in the input document.
#[derive(Debug, serde::Deserialize)]
struct NodeRecord {
    pos: NodePosition,
}

impl AdhocJsonReader {
    fn member<'a>(
        root: &'a Map<String, Value>,
        name: &str,
    ) -> Result<&'a Map<String, Value>, MeshBlueprintError> {
        root.get(name)
            .ok_or_else(|| {
                MeshBlueprintError::MalformedInput(format!("missing top-level `{name}` mapping"))
            })?
            .as_object()
            .ok_or_else(|| {
                MeshBlueprintError::MalformedInput(format!("top-level `{name}` is not a mapping"))
            })
    }

    fn parse_node_key(raw: &str) -> Result<NodeKey, MeshBlueprintError> {
        raw.parse::<u64>()
            .map(NodeKey::new)
            .map_err(|_| MeshBlueprintError::MalformedInput(format!("invalid node key `{raw}`")))
    }

    fn parse_zone_key(raw: &str) -> Result<ZoneKey, MeshBlueprintError> {
        raw.parse::<i64>()
            .map(ZoneKey::new)
            .map_err(|_| MeshBlueprintError::MalformedInput(format!("invalid zone key `{raw}`")))
    }
}

impl MeshDocumentReader for AdhocJsonReader {
    fn read<R: Read>(&self, reader: R) -> Result<MeshDocument, MeshBlueprintError> {
        let value: Value = serde_json::from_reader(reader)?;
        let root = value.as_object().ok_or_else(|| {
            MeshBlueprintError::MalformedInput("document root is not an object".into())
        })?;
        let coord = Self::member(root, "coord")?;
        let zones = Self::member(root, "zones")?;

        let mut document = MeshDocument::new();

        for (raw_key, record) in coord {
            let key = Self::parse_node_key(raw_key)?;
            let record: NodeRecord =
                serde_json::from_value(record.clone()).map_err(|err| {
                    MeshBlueprintError::MalformedInput(format!("node `{raw_key}`: {err}"))
                })?;
            if document.nodes.insert(key, record.pos).is_some() {
                return Err(MeshBlueprintError::MalformedInput(format!(
                    "duplicate node key `{key}`"
                )));
            }
        }

        for (raw_key, record) in zones {
            let key = Self::parse_zone_key(raw_key)?;
            let record: Zone = serde_json::from_value(record.clone()).map_err(|err| {
                MeshBlueprintError::MalformedInput(format!("zone `{raw_key}`: {err}"))
            })?;
            if document.zones.insert(key, record).is_some() {
                return Err(MeshBlueprintError::MalformedInput(format!(
                    "duplicate zone key `{key}`"
                )));
            }
        }

        Ok(document)
    }
}
