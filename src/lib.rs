//! # Upfly Showcase - Demo Widgets and Pipeline Diagram Model
//!
//! **upfly-showcase** holds the stateful parts of the Upfly showcase site: the
//! controllers behind its tabbed and auto-advancing code demos, and the validated
//! model of the architecture diagram. Rendering is left to the host; this crate only
//! supplies state and static data.
//!
//! ## Core Workflow
//!
//! 1.  **Describe a widget**: Build a list of [`DemoItem`](selector::DemoItem)s, or load a
//!     bundled [`WidgetDefinition`](selector::WidgetDefinition) from the [`catalog`].
//! 2.  **Mount it**: Use `DemoSelector::builder` to configure auto-advance and copy
//!     feedback, then `mount` the selector on a shared [`Scheduler`](timer::Scheduler).
//! 3.  **Pump timers**: Advance the [`TimerQueue`](timer::TimerQueue) with elapsed time and
//!     route each fired handle to `DemoSelector::on_timer`.
//! 4.  **Render**: Hand `active_view()` to the syntax highlighter and a built
//!     [`PipelineDiagram`](diagram::PipelineDiagram) to the graph renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use upfly_showcase::prelude::*;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let clock = Rc::new(TimerQueue::new());
//!
//! let mut hero = catalog::selector("hero")?;
//! hero.mount(clock.clone());
//!
//! // 3.5 seconds later the carousel has moved on.
//! for handle in clock.advance(Duration::from_millis(3500)) {
//!     hero.on_timer(handle);
//! }
//! assert_eq!(hero.active_index(), 1);
//!
//! // A manual pick wins until the next tick.
//! hero.select(3)?;
//! assert_eq!(hero.get_active().title, "Multiple Files, Zero Hassle");
//!
//! let pipeline = catalog::diagram("upload-pipeline")?;
//! assert_eq!(pipeline.entry().label, "upflyUpload()");
//! assert_eq!(pipeline.outgoing("7").count(), 2);
//!
//! hero.unmount();
//! assert_eq!(clock.pending(), 0);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod clipboard;
pub mod diagram;
pub mod error;
pub mod prelude;
pub mod selector;
pub mod timer;
