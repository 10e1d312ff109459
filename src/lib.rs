//! # Floorplan
//!
//! A shape-editing engine for 2D floor plans with support for:
//! - Walls, text annotations, placed images and connectors
//! - Handle-based resizing, moving and directional box selection
//! - Command-based editing with undo/redo
//! - JSON plan files and JSON/TOML editor settings
//!
//! ## Architecture
//!
//! Floorplan is organized as a workspace with multiple crates:
//!
//! 1. **floorplan-core** - Geometry types, identifiers, shape limits, errors
//! 2. **floorplan-designer** - Shapes, strategies, factory, commands, manager
//! 3. **floorplan-settings** - Editor settings persistence and validation
//! 4. **floorplan** - This crate: logging setup and the inspection CLI

pub mod inspect;

pub use floorplan_core::{
    Bounds, CommandError, Error, FactoryError, Point, Result, ShapeError, ShapeId, ShapeLimits,
};
pub use floorplan_designer as designer;
pub use floorplan_designer::{PlanFile, Shape, ShapeData, ShapeManager};
pub use floorplan_settings::{EditorSettings, HistorySettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
