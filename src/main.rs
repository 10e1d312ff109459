//! Floorplan - inspection CLI
//!
//! Loads a plan file and reports hit-tests and box selections.

use anyhow::Result;
use clap::Parser;
use floorplan::inspect::{self, parse_box, parse_point};
use floorplan::{init_logging, Bounds, EditorSettings, Point};
use floorplan_settings::default_config_path;
use std::path::PathBuf;
use tracing::info;

/// Inspect a floor plan from the command line
#[derive(Parser, Debug)]
#[command(name = "floorplan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Plan file to open
    #[arg(value_name = "PLAN")]
    plan: PathBuf,

    /// Settings file (JSON or TOML); the platform default is used when omitted
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List the shapes under this canvas point
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    point: Option<Point>,

    /// Box-select from the first corner to the second
    #[arg(long, value_name = "X1,Y1,X2,Y2", value_parser = parse_box)]
    select: Option<Bounds>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    let settings = match &args.config {
        Some(path) => EditorSettings::load_from_file(path)?,
        None => match default_config_path() {
            Ok(path) => EditorSettings::load_or_default(&path)?,
            Err(_) => EditorSettings::default(),
        },
    };

    let manager = inspect::open_plan(&settings, &args.plan)?;

    for (id, shape) in manager.shapes() {
        info!("{}", inspect::describe(id, shape));
    }

    if let Some(point) = args.point {
        println!("Shapes at ({}, {}):", point.x, point.y);
        for line in inspect::shapes_at(&manager, point) {
            println!("  {line}");
        }
    }

    if let Some(selection) = args.select {
        println!("Selected:");
        for line in inspect::shapes_in_box(&manager, &selection) {
            println!("  {line}");
        }
    }

    Ok(())
}
