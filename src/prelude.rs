//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the crate.
//!
//! # Example
//!
//! ```rust
//! use upfly_showcase::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let selector = DemoSelector::builder(vec![
//!     DemoItem::new("npm", "", "npm i upfly multer").with_language("bash"),
//! ])
//! .build()?;
//! assert_eq!(selector.active_view().language, "bash");
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Widgets
pub use crate::selector::{CodeView, DemoItem, DemoSelector, DemoSelectorBuilder, WidgetDefinition};

// Host services
pub use crate::clipboard::{Clipboard, MemoryClipboard};
pub use crate::timer::{Scheduler, TimerHandle, TimerQueue};

// Diagram model
pub use crate::diagram::{
    DiagramDefinition, FlowDocument, IntoDiagram, NodeKind, NodeRole, PipelineDiagram,
    PipelineEdge, PipelineNode, Position,
};

// Bundled assets
pub use crate::catalog;

// Error types
pub use crate::error::{
    CatalogError, ClipboardWriteError, DiagramConversionError, MalformedDiagramError,
    OutOfRangeError, WidgetConfigError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
