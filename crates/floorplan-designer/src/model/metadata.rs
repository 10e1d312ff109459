use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form bookkeeping attached to a shape.
///
/// Known keys are typed; anything else round-trips through `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_load_bearing: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ShapeMetadata {
    /// Metadata stamped with the current time as both creation and modification time
    pub fn created_now() -> Self {
        let now = Utc::now();
        Self {
            created_at: Some(now),
            last_modified: Some(now),
            ..Self::default()
        }
    }

    pub fn touch(&mut self) {
        self.last_modified = Some(Utc::now());
    }
}
