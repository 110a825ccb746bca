use super::{DEFAULT_COPY_FEEDBACK, DemoItem, DemoSelector};
use crate::error::WidgetConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_copy_feedback_ms() -> u64 {
    DEFAULT_COPY_FEEDBACK.as_millis() as u64
}

/// Declarative description of a demo widget, as stored in JSON assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
    #[serde(default)]
    pub restart_on_select: bool,
    pub items: Vec<DemoItem>,
}

impl WidgetDefinition {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates the items and builds an unmounted selector.
    pub fn to_selector(&self) -> Result<DemoSelector, WidgetConfigError> {
        let mut builder = DemoSelector::builder(self.items.clone())
            .copy_feedback(Duration::from_millis(self.copy_feedback_ms))
            .restart_on_select(self.restart_on_select);
        if let Some(ms) = self.auto_advance_ms {
            builder = builder.auto_advance(Duration::from_millis(ms));
        }
        builder.build()
    }
}
