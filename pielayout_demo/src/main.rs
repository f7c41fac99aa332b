// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie layout demo: resolves a series and writes the arcs as SVG.
//!
//! ```text
//! pielayout_demo --config series.json --set innerRadius=40% --highlight 1 --out pie.svg
//! ```
//!
//! Set `RUST_LOG=debug` to see the resolver's logging.

mod config;
mod svg;

use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use kurbo::Rect;
use pielayout::{FadeMode, HighlightMode, HighlightScope, Interaction, Palette};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Resolve a pie series and write it as SVG")]
struct Args {
    /// JSON series configuration; a built-in sample is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Drawing-area width.
    #[arg(long, default_value_t = 400.0)]
    width: f64,
    /// Drawing-area height.
    #[arg(long, default_value_t = 300.0)]
    height: f64,
    /// Override a layout setting, e.g. `--set innerRadius=40%`. Repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    settings: Vec<String>,
    /// Highlight the item at this input index and fade the others.
    #[arg(long, value_name = "INDEX")]
    highlight: Option<usize>,
    /// Output file; the SVG is written to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut series = match &args.config {
        Some(path) => config::load_series(path)?,
        None => config::sample_series(),
    };
    config::apply_settings(&mut series.params, &args.settings)?;
    info!(series = %series.id, items = series.data.len(), "loaded pie series");

    let interaction = match args.highlight {
        Some(index) => {
            ensure!(
                index < series.data.len(),
                "--highlight {index} is out of range for {} items",
                series.data.len()
            );
            let scope = HighlightScope {
                highlight: HighlightMode::Item,
                fade: FadeMode::Series,
            };
            Interaction::from_hovered(&series.identifier(index), series.data.len(), scope)
        }
        None => Interaction::new(),
    };

    let area = Rect::new(0.0, 0.0, args.width.max(0.0), args.height.max(0.0));
    let arcs = series.resolve(area, &interaction, &Palette::default());
    for arc in &arcs {
        info!(
            index = arc.index,
            id = %arc.id,
            start = arc.start_angle,
            end = arc.end_angle,
            outer_radius = arc.outer_radius,
            state = ?arc.state,
            "arc"
        );
    }

    let svg = svg::render_svg(&arcs, area);
    match &args.out {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote svg");
        }
        None => io::stdout()
            .write_all(svg.as_bytes())
            .context("failed to write svg to stdout")?,
    }
    Ok(())
}
