//! # Floorplan Designer
//!
//! The shape-editing engine of the floor-plan editor: shape data, hit-testing,
//! render strategies, and command-based mutation with undo/redo.
//!
//! ## Core Components
//!
//! ### Shapes
//! - **Wall**: a thick line segment with two endpoint handles
//! - **Text**: a text annotation in a resizable box with eight handles
//! - **Image**: a placed raster image, resized like a text box
//! - **Connector**: a straight or curved link between two points
//!
//! ### Editing
//! - **Factory**: type-tag registry that builds shapes from property bags
//! - **Commands**: add, remove, handle update, position commit, bring to front
//! - **History**: linear undo/redo
//! - **Manager**: owns the collection, z-order, gestures and history
//! - **Events**: ADDED / UPDATED / REMOVED / SELECTED / DESELECTED notifications
//!
//! ## Architecture
//!
//! ```text
//! ShapeManager
//!   ├── ShapeFactory (type tag -> constructor)
//!   ├── ShapeStore (live shapes, z-order, observers)
//!   │     └── Shape (Wall | Text | Image | Connector)
//!   │           ├── SelectionStrategy (hit-testing)
//!   │           └── RenderStrategy (draw primitives)
//!   └── CommandHistory (undo / redo stacks)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorplan_core::{Bounds, Point, ShapeLimits};
//! use floorplan_designer::{ShapeData, ShapeManager, WallData};
//!
//! let mut manager = ShapeManager::new(ShapeLimits::default());
//! let wall = WallData::new(Point::new(10.0, 10.0), Point::new(90.0, 10.0), 10.0);
//! manager.add_shape("wall", ShapeData::Wall(wall)).unwrap();
//!
//! // Left-to-right box: only fully enclosed shapes
//! let box_ltr = Bounds::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
//! assert_eq!(manager.shapes_like_revit(&box_ltr).len(), 1);
//! ```

pub mod commands;
pub mod events;
pub mod factory;
pub mod history;
pub mod manager;
pub mod model;
pub mod render;
pub mod selection;
pub mod serialization;
pub mod shape_store;
pub mod shapes;

pub use commands::{
    AddShape, BringToFront, Command, DesignerCommand, RemoveShapes, UpdateShapeByHandle,
    UpdateShapesPosition,
};
pub use events::{ShapeEvent, ShapeEventType, ShapeObservers, SubscriptionId};
pub use factory::{ShapeConstructor, ShapeFactory};
pub use history::CommandHistory;
pub use manager::ShapeManager;
pub use model::{
    ConnectionKind, ConnectionPoint, ConnectorData, ConnectorRoute, Geometry, HandleProperties,
    ImageData, ImageShapeData, LineGeometry, RectangularGeometry, ShapeData, ShapeMetadata,
    ShapeProperties, ShapeRecord, ShapeStyle, TextAlign, TextShapeData, TextStyle, WallData,
};
pub use render::{DrawPrimitive, RenderStrategy, RenderSurface};
pub use selection::SelectionStrategy;
pub use serialization::{PlanEntry, PlanFile, PlanMetadata};
pub use shape_store::{ShapeStore, StoredShape};
pub use shapes::{Connector, DesignerShape, ImageShape, Shape, TextShape, Wall};

// Re-export the shared core types
pub use floorplan_core::{Bounds, Point, ShapeId, ShapeLimits};
