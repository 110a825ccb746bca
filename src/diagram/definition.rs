use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual category of a pipeline node. Drives color and style, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Entry,
    Storage,
    Decision,
    Backup,
    Controller,
    Processing,
    Router,
    Memory,
    Disk,
    Cloud,
    Error,
    Fallback,
    Success,
    Output,
}

impl NodeKind {
    pub const ALL: [NodeKind; 14] = [
        NodeKind::Entry,
        NodeKind::Storage,
        NodeKind::Decision,
        NodeKind::Backup,
        NodeKind::Controller,
        NodeKind::Processing,
        NodeKind::Router,
        NodeKind::Memory,
        NodeKind::Disk,
        NodeKind::Cloud,
        NodeKind::Error,
        NodeKind::Fallback,
        NodeKind::Success,
        NodeKind::Output,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Entry => "entry",
            NodeKind::Storage => "storage",
            NodeKind::Decision => "decision",
            NodeKind::Backup => "backup",
            NodeKind::Controller => "controller",
            NodeKind::Processing => "processing",
            NodeKind::Router => "router",
            NodeKind::Memory => "memory",
            NodeKind::Disk => "disk",
            NodeKind::Cloud => "cloud",
            NodeKind::Error => "error",
            NodeKind::Fallback => "fallback",
            NodeKind::Success => "success",
            NodeKind::Output => "output",
        }
    }

    /// Fill color used by the graph renderer.
    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Entry => "#1e40af",
            NodeKind::Storage => "#7c3aed",
            NodeKind::Decision => "#f59e0b",
            NodeKind::Backup => "#059669",
            NodeKind::Controller => "#4f46e5",
            NodeKind::Processing => "#db2777",
            NodeKind::Router => "#0891b2",
            NodeKind::Memory => "#2563eb",
            NodeKind::Disk => "#64748b",
            NodeKind::Cloud => "#0284c7",
            NodeKind::Error => "#dc2626",
            NodeKind::Fallback => "#ea580c",
            NodeKind::Success => "#16a34a",
            NodeKind::Output => "#22c55e",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Structural role of a node: where the pipeline starts and where it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Entry,
    #[default]
    Step,
    Terminal,
}

/// Authoring-time coordinate in the layout plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single box in the pipeline diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineNode {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    pub kind: NodeKind,
    #[serde(default)]
    pub role: NodeRole,
    pub position: Position,
}

impl PipelineNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sublabel: None,
            kind,
            role: NodeRole::Step,
            position: Position::default(),
        }
    }

    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn with_role(mut self, role: NodeRole) -> Self {
        self.role = role;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl PipelineEdge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
            animated: false,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }

    /// The branch label, treating blank labels as absent.
    pub fn branch_label(&self) -> Option<&str> {
        self.label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

/// The canonical, unvalidated node and edge lists of a diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramDefinition {
    pub nodes: Vec<PipelineNode>,
    pub edges: Vec<PipelineEdge>,
}
