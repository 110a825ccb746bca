use thiserror::Error;

/// Raised when a widget is asked to show an item it does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Index {index} is out of range for a selection of {len} items")]
pub struct OutOfRangeError {
    pub index: usize,
    pub len: usize,
}

/// Errors reported by a clipboard service when a write does not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardWriteError {
    #[error("Clipboard write was denied by the platform")]
    PermissionDenied,

    #[error("No clipboard is available in this context")]
    Unavailable,

    #[error("Clipboard write failed: {0}")]
    Failed(String),
}

/// Errors that can occur while validating a widget's items at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetConfigError {
    #[error("A widget needs at least one item")]
    NoItems,

    #[error("Item '{title}' has empty content")]
    EmptyContent { title: String },

    #[error("Item '{title}' highlights line {line}, but its content only has {line_count} lines")]
    HighlightOutOfBounds {
        title: String,
        line: u32,
        line_count: usize,
    },

    #[error("Item '{title}' declares an empty list of sub-tabs")]
    EmptyChildren { title: String },

    #[error("Sub-tab '{child}' of item '{title}' has sub-tabs of its own; nesting is limited to one level")]
    NestedTooDeep { title: String, child: String },

    #[error("Auto-advance interval must be greater than zero")]
    ZeroInterval,
}

/// Errors that can occur while validating a pipeline diagram.
///
/// Every variant carries the id of the node or edge that broke the invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDiagramError {
    #[error("Node id '{0}' is used more than once")]
    DuplicateNodeId(String),

    #[error("Edge id '{0}' is used more than once")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which does not exist")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Expected exactly one entry node, found {} ({})", found.len(), found.join(", "))]
    EntryCount { found: Vec<String> },

    #[error("Expected exactly one terminal node, found {} ({})", found.len(), found.join(", "))]
    TerminalCount { found: Vec<String> },

    #[error("Entry node '{0}' has incoming edges")]
    EntryHasIncoming(String),

    #[error("Terminal node '{0}' has outgoing edges")]
    TerminalHasOutgoing(String),

    #[error("Node '{0}' is not reachable from the entry node")]
    Unreachable(String),

    #[error("Node '{0}' has no path to the terminal node")]
    DeadEnd(String),

    #[error("Node '{0}' is part of a cycle")]
    Cycle(String),

    #[error("Decision node '{node_id}' has an unlabeled branch '{edge_id}'")]
    UnlabeledBranch { node_id: String, edge_id: String },

    #[error("Node '{node_id}' has more than one branch labeled '{label}'")]
    DuplicateBranchLabel { node_id: String, label: String },
}

/// Errors that can occur when converting a custom document format into a `DiagramDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramConversionError {
    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownKind { node_id: String, kind: String },

    #[error("Node '{node_id}' has an unknown node type: '{node_type}'")]
    UnknownNodeType { node_id: String, node_type: String },
}

/// Errors raised while loading one of the bundled widget or diagram assets.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown asset '{0}'")]
    UnknownAsset(String),

    #[error("Failed to parse asset '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Widget '{name}' is invalid: {source}")]
    Widget {
        name: String,
        #[source]
        source: WidgetConfigError,
    },

    #[error("Diagram '{name}' could not be converted: {source}")]
    Conversion {
        name: String,
        #[source]
        source: DiagramConversionError,
    },

    #[error("Diagram '{name}' is malformed: {source}")]
    Diagram {
        name: String,
        #[source]
        source: MalformedDiagramError,
    },
}
