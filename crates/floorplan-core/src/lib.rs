//! # Floorplan Core
//!
//! Core types shared by every floor-plan editor crate.
//!
//! ## Contents
//!
//! - **Geometry**: [`Point`], [`Bounds`] and the point utilities used by hit-testing
//!   (distances, projections, circle and segment containment, quadratic curve sampling)
//! - **Identifiers**: [`ShapeId`], the stable UUID-backed key of every shape
//! - **Limits**: [`ShapeLimits`], the numeric knobs of handle hit-testing and resizing
//! - **Errors**: the error taxonomy shared by the factory, shapes and commands
//!
//! This crate knows nothing about concrete shape kinds; those live in
//! `floorplan-designer`.

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{CommandError, Error, FactoryError, Result, ShapeError};
pub use geometry::{Bounds, Point};
pub use types::{ShapeId, ShapeLimits};
