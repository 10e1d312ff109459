//! Shape lifecycle notifications.
//!
//! Listeners are plain closures held by [`ShapeObservers`]; there is no
//! subject base type. Listeners receive a snapshot of the shape's property
//! bag, so they cannot mutate the live shape while being notified.

use std::fmt;

use floorplan_core::ShapeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ShapeData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShapeEventType {
    Added,
    Updated,
    Removed,
    Selected,
    Deselected,
}

/// A single lifecycle notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeEvent {
    #[serde(rename = "type")]
    pub kind: ShapeEventType,
    pub shape_id: ShapeId,
    /// Property bag at the time of the event
    pub shape: ShapeData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl ShapeEvent {
    pub fn new(kind: ShapeEventType, shape_id: ShapeId, shape: ShapeData) -> Self {
        Self {
            kind,
            shape_id,
            shape,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Handle returned by [`ShapeObservers::subscribe`], used to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Listener = Box<dyn FnMut(&ShapeEvent)>;

/// Ordered list of event listeners.
#[derive(Default)]
pub struct ShapeObservers {
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for ShapeObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ShapeObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ShapeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener in subscription order
    pub fn notify(&mut self, event: &ShapeEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
