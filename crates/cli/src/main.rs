mod io;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use simplex_isect::intersect::{boundary_intersections, DEFAULT_TOL};
use simplex_isect::prep::polytope_vertices;
use simplex_isect::sample::{overlapping_pair, PairReplay};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::io::{read_json, write_json, PairInput, PointTable, RunOutput};
use crate::provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "simplex-isect")]
#[command(about = "Boundary intersections of two N-simplices")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect the pair in a JSON input and write the crossings
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TOL)]
        tol: f64,
        /// Also write the full vertex set of the intersection polytope
        #[arg(long)]
        with_vertices: bool,
    },
    /// Write a seeded overlapping pair as a run input
    Sample {
        #[arg(long)]
        dim: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            tol,
            with_vertices,
        } => run(input, out, tol, with_vertices, cmd.vk),
        Action::Sample { dim, seed, out } => sample(dim, seed, out, cmd.vk),
        Action::Report => report(cmd.vk),
    }
}

fn run(
    input: PathBuf,
    out: PathBuf,
    tol: f64,
    with_vertices: bool,
    vk: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tol, vk = ?vk, "run");
    let doc: PairInput = read_json(&input)?;
    let pair = doc.to_pair(tol)?;
    let crossings = boundary_intersections(&pair, tol)?;
    let vertices = if with_vertices {
        Some(PointTable::from(&polytope_vertices(&pair, tol)?))
    } else {
        None
    };
    tracing::info!(
        dim = pair.dim(),
        crossings = crossings.len(),
        vertices = vertices.as_ref().map(|v| v.points.len()),
        "intersected"
    );

    let result = RunOutput {
        dim: pair.dim(),
        tol,
        count: crossings.len(),
        crossings: PointTable::from(&crossings),
        vertices,
    };
    write_json(&out, &result)?;
    let params = json!({
        "input": input.to_string_lossy(),
        "tol": tol,
        "with_vertices": with_vertices,
        "explicit_orderings": doc.orderings.is_some(),
    });
    write_sidecar(&out, Payload::new(params, vk))?;
    Ok(())
}

fn sample(dim: usize, seed: u64, out: PathBuf, vk: Option<String>) -> Result<()> {
    tracing::info!(dim, seed, out = %out.display(), "sample");
    anyhow::ensure!(dim >= 1, "dimension must be at least 1");
    let (s1, s2) = overlapping_pair(PairReplay { seed, dim });
    write_json(&out, &PairInput::from_matrices(&s1, &s2))?;
    write_sidecar(&out, Payload::new(json!({ "dim": dim, "seed": seed }), vk))?;
    Ok(())
}

fn report(vk: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "lib_version": simplex_isect::VERSION,
        "vk": vk,
        "params": { "default_tol": DEFAULT_TOL },
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
