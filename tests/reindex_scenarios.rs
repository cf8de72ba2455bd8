//! End-to-end scenarios for the reindexing pipeline, one per historical
//! converter variant: plain gap-filling, strict contiguity, field synthesis,
//! and the r-offset transform.

use mesh_blueprint::prelude::*;

const GAPPED: &str = r#"{
    "coord": {
        "0": {"pos": {"r": 1.0, "z": 1.0}},
        "2": {"pos": {"r": 3.0, "z": 3.0}}
    },
    "zones": {}
}"#;

const THREE_ZONES: &str = r#"{
    "coord": {
        "0": {"pos": {"r": 0.0, "z": 0.0}},
        "1": {"pos": {"r": 1.0, "z": 0.0}},
        "2": {"pos": {"r": 2.0, "z": 0.0}},
        "3": {"pos": {"r": 0.0, "z": 1.0}},
        "4": {"pos": {"r": 1.0, "z": 1.0}},
        "5": {"pos": {"r": 2.0, "z": 1.0}},
        "6": {"pos": {"r": 0.0, "z": 2.0}},
        "7": {"pos": {"r": 1.0, "z": 2.0}}
    },
    "zones": {
        "0": {"nids": [0, 1, 4, 3]},
        "1": {"nids": [1, 2, 5, 4]},
        "2": {"nids": [3, 4, 7, 6]}
    }
}"#;

fn read(text: &str) -> MeshDocument {
    AdhocJsonReader.read(text.as_bytes()).expect("parse input")
}

#[test]
fn gap_fill_inserts_sentinel_and_skips_table_entry() {
    let doc = read(GAPPED);
    let mesh = convert(&doc, &ConvertOptions::default()).expect("convert");
    assert_eq!(mesh.coordsets.coords.values.r, vec![1.0, -1.0, 3.0]);
    assert_eq!(mesh.coordsets.coords.values.z, vec![1.0, -1.0, 3.0]);
}

#[test]
fn strict_policy_rejects_the_same_gapped_input() {
    let doc = read(GAPPED);
    let options = ConvertOptions {
        gap_policy: GapPolicy::Strict,
        ..ConvertOptions::default()
    };
    let err = convert(&doc, &options).unwrap_err();
    assert!(matches!(err, MeshBlueprintError::NonMonotonicKey { .. }));
}

#[test]
fn element_field_counts_zone_ordinals() {
    let doc = read(THREE_ZONES);
    let options = ConvertOptions {
        field: Some(FieldAssociation::Element),
        ..ConvertOptions::default()
    };
    let mesh = convert(&doc, &options).expect("convert");
    let field = &mesh.fields[SYNTHETIC_FIELD_NAME];
    assert_eq!(field.association, "element");
    assert_eq!(field.values, vec![0.0, 1.0, 2.0]);
    assert_eq!(field.values.len(), mesh.element_count());
}

#[test]
fn legacy_vertex_field_still_counts_zones() {
    let doc = read(THREE_ZONES);
    let options = ConvertOptions {
        field: Some(FieldAssociation::Vertex),
        ..ConvertOptions::default()
    };
    let mesh = convert(&doc, &options).expect("convert");
    let field = &mesh.fields[SYNTHETIC_FIELD_NAME];
    assert_eq!(field.association, "vertex");
    // The legacy schema supplies one value per zone, not per vertex.
    assert_eq!(field.values.len(), doc.zone_count());
    assert_ne!(field.values.len(), mesh.vertex_count());
}

#[test]
fn r_offset_variant_shifts_radial_coordinates() {
    let doc = read(THREE_ZONES);
    let options = ConvertOptions {
        r_offset: 5.0,
        ..ConvertOptions::default()
    };
    let mesh = convert(&doc, &options).expect("convert");
    assert_eq!(mesh.coordsets.coords.values.r[..3], [-5.0, -4.0, -3.0]);
    // z passes through untouched.
    assert_eq!(mesh.coordsets.coords.values.z[..3], [0.0, 0.0, 0.0]);
}

#[test]
fn connectivity_is_flat_quads_in_zone_key_order() {
    let doc = read(THREE_ZONES);
    let mesh = convert(&doc, &ConvertOptions::default()).expect("convert");
    let conn = &mesh.topologies.mesh.elements.connectivity;
    assert_eq!(conn.len(), 4 * doc.zone_count());
    assert_eq!(conn[..4], [0, 1, 4, 3]);
    assert_eq!(conn[4..8], [1, 2, 5, 4]);
    assert_eq!(conn[8..], [3, 4, 7, 6]);
}

#[test]
fn dangling_reference_fails_whole_conversion() {
    let doc = read(
        r#"{
            "coord": {"0": {"pos": {"r": 0.0, "z": 0.0}}},
            "zones": {"0": {"nids": [0, 0, 0, 42]}}
        }"#,
    );
    for policy in [GapPolicy::Fill, GapPolicy::Strict] {
        let options = ConvertOptions {
            gap_policy: policy,
            ..ConvertOptions::default()
        };
        let err = convert(&doc, &options).unwrap_err();
        match err {
            MeshBlueprintError::DanglingReference { zone, node } => {
                assert_eq!(zone, ZoneKey::new(0));
                assert_eq!(node, NodeKey::new(42));
            }
            other => panic!("expected DanglingReference, got {other:?}"),
        }
    }
}

#[test]
fn zone_referencing_a_gap_slot_is_dangling() {
    let doc = read(
        r#"{
            "coord": {
                "0": {"pos": {"r": 0.0, "z": 0.0}},
                "2": {"pos": {"r": 2.0, "z": 0.0}}
            },
            "zones": {"0": {"nids": [0, 2, 0, 1]}}
        }"#,
    );
    // Key 1 is a placeholder slot: it occupies an output index but has no
    // translation entry.
    let err = convert(&doc, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        MeshBlueprintError::DanglingReference {
            node: n, ..
        } if n == NodeKey::new(1)
    ));
}
