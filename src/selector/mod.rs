//! The demo selector controller.
//!
//! A [`DemoSelector`] owns the items of one widget (a tab strip, a carousel, a
//! provider switcher), tracks which one is active, optionally advances on a fixed
//! interval, and keeps the short-lived "copied" flag used for clipboard feedback.
//!
//! Timers are borrowed from a [`Scheduler`] while the widget is mounted and are all
//! released on [`DemoSelector::unmount`] or drop.

use crate::clipboard::Clipboard;
use crate::error::{ClipboardWriteError, OutOfRangeError};
use crate::timer::{Scheduler, TimerHandle};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

mod builder;
mod definition;
mod item;

pub use builder::DemoSelectorBuilder;
pub use definition::WidgetDefinition;
pub use item::{CodeView, DemoItem};

/// How long the "copied" flag stays up after a successful copy.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Controller for one demo widget: the active item, auto-advance and copy feedback.
///
/// Built through [`DemoSelectorBuilder`]; timers run only between `mount` and `unmount`.
pub struct DemoSelector {
    items: Vec<DemoItem>,
    active_index: usize,
    // One entry per item so switching tabs never invalidates a sub-tab choice.
    child_indices: Vec<usize>,
    auto_advance: Option<Duration>,
    copy_feedback: Duration,
    restart_on_select: bool,
    copied_label: Option<String>,
    scheduler: Option<Rc<dyn Scheduler>>,
    ticker: Option<TimerHandle>,
    pending_clear: Option<TimerHandle>,
}

impl DemoSelector {
    pub fn builder(items: Vec<DemoItem>) -> DemoSelectorBuilder {
        DemoSelectorBuilder::new(items)
    }

    pub(crate) fn from_parts(
        items: Vec<DemoItem>,
        auto_advance: Option<Duration>,
        copy_feedback: Duration,
        restart_on_select: bool,
    ) -> Self {
        let child_indices = vec![0; items.len()];
        Self {
            items,
            active_index: 0,
            child_indices,
            auto_advance,
            copy_feedback,
            restart_on_select,
            copied_label: None,
            scheduler: None,
            ticker: None,
            pending_clear: None,
        }
    }

    // --- Lifecycle ---

    /// Attaches the widget to a scheduler and starts auto-advance if configured.
    ///
    /// Mounting an already mounted widget tears the previous mount down first.
    pub fn mount(&mut self, scheduler: Rc<dyn Scheduler>) {
        if self.is_mounted() {
            self.unmount();
        }
        if let Some(period) = self.auto_advance {
            self.ticker = Some(scheduler.set_interval(period));
        }
        debug!(
            items = self.items.len(),
            auto_advance = ?self.auto_advance,
            "demo widget mounted"
        );
        self.scheduler = Some(scheduler);
    }

    /// Cancels every timer the widget owns, drops any copied flag and detaches the
    /// widget from its scheduler.
    pub fn unmount(&mut self) {
        let Some(scheduler) = self.scheduler.take() else {
            return;
        };
        if let Some(ticker) = self.ticker.take() {
            scheduler.clear(ticker);
        }
        if let Some(clear) = self.pending_clear.take() {
            scheduler.clear(clear);
        }
        // Without its clear timer the flag would never drop.
        self.copied_label = None;
        debug!("demo widget unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.scheduler.is_some()
    }

    // --- Selection ---

    pub fn items(&self) -> &[DemoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: a widget is built with at least one item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items paired with the index that selects them. Rendering tabs from this
    /// keeps every index handed to `select` in range.
    pub fn tabs(&self) -> impl Iterator<Item = (usize, &DemoItem)> {
        self.items.iter().enumerate()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn get_active(&self) -> &DemoItem {
        &self.items[self.active_index]
    }

    pub fn select(&mut self, index: usize) -> Result<(), OutOfRangeError> {
        if index >= self.items.len() {
            return Err(OutOfRangeError {
                index,
                len: self.items.len(),
            });
        }
        self.active_index = index;
        if self.restart_on_select {
            self.restart_ticker();
        }
        Ok(())
    }

    /// Selects a sub-tab of the active item.
    pub fn select_child(&mut self, index: usize) -> Result<(), OutOfRangeError> {
        let len = self.get_active().children().len();
        if index >= len {
            return Err(OutOfRangeError { index, len });
        }
        self.child_indices[self.active_index] = index;
        Ok(())
    }

    /// Sub-tab index of the active item, if it has sub-tabs.
    pub fn active_child_index(&self) -> Option<usize> {
        self.get_active()
            .has_children()
            .then(|| self.child_indices[self.active_index])
    }

    pub fn active_child(&self) -> Option<&DemoItem> {
        self.active_child_index()
            .and_then(|index| self.get_active().children().get(index))
    }

    /// The content to render: the active sub-tab when there is one, else the active item.
    pub fn active_view(&self) -> CodeView<'_> {
        self.active_child()
            .unwrap_or_else(|| self.get_active())
            .code_view()
    }

    // --- Timers ---

    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance
    }

    /// Advances to the next item, wrapping around. No-op unless the widget is mounted
    /// and auto-advancing.
    pub fn tick(&mut self) {
        if !self.is_mounted() || self.auto_advance.is_none() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.items.len();
    }

    /// Routes a fired timer to this widget. Returns false if the handle is not one of
    /// this widget's live timers.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.ticker == Some(handle) {
            self.tick();
            return true;
        }
        if self.pending_clear == Some(handle) {
            self.pending_clear = None;
            self.copied_label = None;
            return true;
        }
        false
    }

    fn restart_ticker(&mut self) {
        let (Some(scheduler), Some(period)) = (&self.scheduler, self.auto_advance) else {
            return;
        };
        if let Some(ticker) = self.ticker.take() {
            scheduler.clear(ticker);
        }
        self.ticker = Some(scheduler.set_interval(period));
    }

    // --- Clipboard feedback ---

    pub fn copied_label(&self) -> Option<&str> {
        self.copied_label.as_deref()
    }

    pub fn is_copied(&self, label: &str) -> bool {
        self.copied_label.as_deref() == Some(label)
    }

    /// Writes `text` to the clipboard and, on success, raises the copied flag for
    /// `label` until the feedback delay elapses.
    ///
    /// A second successful copy replaces the label and restarts the delay; only one
    /// clear is ever pending. A failed write leaves the flag untouched.
    pub async fn copy<C: Clipboard>(
        &mut self,
        clipboard: &C,
        text: &str,
        label: impl Into<String>,
    ) -> Result<(), ClipboardWriteError> {
        let label = label.into();
        if let Err(err) = clipboard.write_text(text).await {
            warn!(label = %label, error = %err, "failed to copy to clipboard");
            return Err(err);
        }

        let Some(scheduler) = &self.scheduler else {
            debug!(label = %label, "copied from an unmounted widget; feedback skipped");
            return Ok(());
        };
        if let Some(previous) = self.pending_clear.take() {
            scheduler.clear(previous);
        }
        self.pending_clear = Some(scheduler.set_timeout(self.copy_feedback));
        self.copied_label = Some(label);
        Ok(())
    }
}

impl Drop for DemoSelector {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for DemoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoSelector")
            .field("items", &self.items.len())
            .field("active_index", &self.active_index)
            .field("auto_advance", &self.auto_advance)
            .field("copied_label", &self.copied_label)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::timer::TimerQueue;
    use tokio_test::block_on;

    fn items(n: usize) -> Vec<DemoItem> {
        (0..n)
            .map(|i| DemoItem::new(format!("Slide {i}"), "", format!("code {i}")))
            .collect()
    }

    #[test]
    fn test_tick_is_noop_without_auto_advance() {
        let clock = Rc::new(TimerQueue::new());
        let mut selector = DemoSelector::builder(items(3)).build().unwrap();
        selector.mount(clock.clone());

        selector.tick();
        assert_eq!(selector.active_index(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_tick_is_noop_when_unmounted() {
        let mut selector = DemoSelector::builder(items(3))
            .auto_advance(Duration::from_millis(100))
            .build()
            .unwrap();
        selector.tick();
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn test_remount_replaces_ticker() {
        let clock = Rc::new(TimerQueue::new());
        let mut selector = DemoSelector::builder(items(2))
            .auto_advance(Duration::from_millis(100))
            .build()
            .unwrap();
        selector.mount(clock.clone());
        selector.mount(clock.clone());
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_foreign_handle_is_ignored() {
        let clock = Rc::new(TimerQueue::new());
        let stray = clock.set_timeout(Duration::from_millis(5));
        let mut selector = DemoSelector::builder(items(2)).build().unwrap();
        selector.mount(clock.clone());

        assert!(!selector.on_timer(stray));
    }

    #[test]
    fn test_copy_from_unmounted_widget_skips_feedback() {
        let clipboard = MemoryClipboard::new();
        let mut selector = DemoSelector::builder(items(1)).build().unwrap();

        block_on(selector.copy(&clipboard, "npm i upfly", "npm")).unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("npm i upfly"));
        assert!(selector.copied_label().is_none());
    }
}
