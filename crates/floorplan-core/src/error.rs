//! Error handling for the floor-plan editor
//!
//! Provides the error types for every layer of the shape-editing engine:
//! - Shape errors (invalid handle access, degenerate or mismatched data)
//! - Factory errors (shape-type registration and lookup)
//! - Command errors (preconditions a command checks before it can be undone)
//!
//! Soft conditions such as undo on an empty history are not errors and never
//! surface through these types.

use thiserror::Error;

use crate::types::ShapeId;

/// Shape error type
///
/// Raised by shape constructors and handle operations when the request cannot
/// be honoured against the shape's current geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Handle index outside the shape's handle list
    #[error("Invalid handle index {index} (shape has {count} handles)")]
    InvalidHandleIndex {
        /// The requested handle index.
        index: usize,
        /// Number of handles the shape exposes.
        count: usize,
    },

    /// Geometry that cannot describe a usable shape
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },

    /// Property bag of the wrong kind handed to a shape
    #[error("Shape data mismatch: expected {expected}, found {found}")]
    DataMismatch {
        /// The kind the shape accepts.
        expected: String,
        /// The kind that was supplied.
        found: String,
    },

    /// A property value outside its valid range
    #[error("Invalid property '{name}': {reason}")]
    InvalidProperty {
        /// The property name.
        name: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Factory error type
///
/// Configuration mistakes in the shape-type registry. These indicate a setup
/// bug, not bad runtime data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// A constructor is already registered under this tag
    #[error("Shape type '{type_tag}' is already registered")]
    DuplicateType {
        /// The duplicated type tag.
        type_tag: String,
    },

    /// No constructor is registered under this tag
    #[error("Unknown shape type: {type_tag}")]
    UnknownType {
        /// The unknown type tag.
        type_tag: String,
    },
}

/// Command error type
///
/// Precondition violations detected while constructing or running a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command targets a shape that is not in the collection
    #[error("Shape with id {id} not found")]
    ShapeNotFound {
        /// The missing shape id.
        id: ShapeId,
    },

    /// An added shape carries an id that is already in the collection
    #[error("Shape with id {id} already exists")]
    ShapeExists {
        /// The duplicated shape id.
        id: ShapeId,
    },

    /// A handle drag was started while another one is still active
    #[error("A handle drag on shape {id} is already in progress")]
    DragInProgress {
        /// The shape whose handle is being dragged.
        id: ShapeId,
    },
}

/// Main error type for the floor-plan editor
///
/// A unified error type that can represent any error from the engine's layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Factory error
    #[error(transparent)]
    Factory(#[from] FactoryError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a registry configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Factory(_))
    }

    /// Check if this is a precondition violation of a command or handle operation
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            Error::Command(_) | Error::Shape(ShapeError::InvalidHandleIndex { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
