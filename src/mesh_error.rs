//! MeshBlueprintError: Unified error type for mesh-blueprint public APIs
//!
//! This error type is used throughout the mesh-blueprint library to provide
//! robust, non-panicking error handling for all public APIs. Every detected
//! inconsistency aborts the whole conversion before any output is written.

use crate::topology::node::NodeKey;
use crate::topology::zone::ZoneKey;
use thiserror::Error;

/// Unified error type for mesh-blueprint operations.
#[derive(Debug, Error)]
pub enum MeshBlueprintError {
    /// The input document is missing required structure, or a key/record
    /// cannot be interpreted. The message names the offending member.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A zone references a node key with no entry in the translation table.
    #[error("zone `{zone}` references node key `{node}` with no translation entry")]
    DanglingReference {
        /// Zone whose connectivity contains the bad reference.
        zone: ZoneKey,
        /// The unresolvable node key.
        node: NodeKey,
    },
    /// Node keys violate the contiguity required by the strict gap policy.
    #[error("non-monotonic node key: expected `{expected}`, found `{found}`")]
    NonMonotonicKey {
        /// The key the strict pass expected next.
        expected: u64,
        /// The key actually encountered.
        found: NodeKey,
    },
    /// I/O failure in a reader or writer.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON syntax or serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
