//! mesh2bp: command-line front end for the mesh-blueprint converter.
//!
//! Reads an ad-hoc mesh JSON file, runs the reindexing pipeline, and writes
//! the Blueprint mesh JSON. The output file is only created after the whole
//! conversion has succeeded.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use mesh_blueprint::prelude::*;
use std::fs::{self, File};
use std::path::PathBuf;

/// mesh2bp command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "mesh2bp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert ad-hoc rz mesh JSON to Blueprint mesh JSON", long_about = None)]
struct CliArgs {
    /// Input mesh file path.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
    /// Output Blueprint file path.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
    /// How to treat gaps in the node key sequence.
    #[arg(long, value_enum, default_value = "fill")]
    gap_policy: GapPolicyArg,
    /// Synthetic scalar field to attach.
    #[arg(long, value_enum, default_value = "none")]
    field: FieldArg,
    /// Offset subtracted from every r-coordinate before output.
    #[arg(long, default_value_t = 0.0, value_name = "OFFSET")]
    r_offset: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum GapPolicyArg {
    /// Reject non-contiguous node keys.
    Strict,
    /// Fill gaps with placeholder positions.
    Fill,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum FieldArg {
    /// No synthetic field.
    None,
    /// One value per element.
    Element,
    /// Legacy vertex-declared variant.
    Vertex,
}

impl From<GapPolicyArg> for GapPolicy {
    fn from(arg: GapPolicyArg) -> Self {
        match arg {
            GapPolicyArg::Strict => GapPolicy::Strict,
            GapPolicyArg::Fill => GapPolicy::Fill,
        }
    }
}

impl FieldArg {
    fn into_association(self) -> Option<FieldAssociation> {
        match self {
            FieldArg::None => None,
            FieldArg::Element => Some(FieldAssociation::Element),
            FieldArg::Vertex => Some(FieldAssociation::Vertex),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CliArgs::parse();

    let options = ConvertOptions {
        gap_policy: args.gap_policy.into(),
        field: args.field.into_association(),
        r_offset: args.r_offset,
    };

    let input = File::open(&args.input)
        .with_context(|| format!("opening input `{}`", args.input.display()))?;
    let document = AdhocJsonReader
        .read(input)
        .with_context(|| format!("reading `{}`", args.input.display()))?;

    let mesh = convert(&document, &options).context("conversion failed")?;

    let mut buffer = Vec::new();
    BlueprintJsonWriter
        .write(&mut buffer, &mesh)
        .context("serializing Blueprint document")?;
    fs::write(&args.output, &buffer)
        .with_context(|| format!("writing output `{}`", args.output.display()))?;

    info!(
        "converted `{}` ({} nodes, {} zones) -> `{}` ({} vertices, {} elements)",
        args.input.display(),
        document.node_count(),
        document.zone_count(),
        args.output.display(),
        mesh.vertex_count(),
        mesh.element_count()
    );
    Ok(())
}
