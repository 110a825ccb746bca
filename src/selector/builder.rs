use super::{DEFAULT_COPY_FEEDBACK, DemoItem, DemoSelector};
use crate::error::WidgetConfigError;
use std::time::Duration;

/// Configures a [`DemoSelector`] before its items are validated.
pub struct DemoSelectorBuilder {
    items: Vec<DemoItem>,
    auto_advance: Option<Duration>,
    copy_feedback: Duration,
    restart_on_select: bool,
}

impl DemoSelectorBuilder {
    pub fn new(items: Vec<DemoItem>) -> Self {
        Self {
            items,
            auto_advance: None,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            restart_on_select: false,
        }
    }

    /// Cycles through the items every `interval` while mounted.
    pub fn auto_advance(mut self, interval: Duration) -> Self {
        self.auto_advance = Some(interval);
        self
    }

    pub fn copy_feedback(mut self, delay: Duration) -> Self {
        self.copy_feedback = delay;
        self
    }

    /// Restart the auto-advance phase whenever the user picks an item.
    pub fn restart_on_select(mut self, restart: bool) -> Self {
        self.restart_on_select = restart;
        self
    }

    pub fn build(self) -> Result<DemoSelector, WidgetConfigError> {
        if self.items.is_empty() {
            return Err(WidgetConfigError::NoItems);
        }
        if self.auto_advance.is_some_and(|interval| interval.is_zero()) {
            return Err(WidgetConfigError::ZeroInterval);
        }
        self.items.iter().try_for_each(DemoItem::validate)?;

        Ok(DemoSelector::from_parts(
            self.items,
            self.auto_advance,
            self.copy_feedback,
            self.restart_on_select,
        ))
    }
}
