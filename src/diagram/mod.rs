//! The static pipeline diagram model.
//!
//! A [`PipelineDiagram`] is built once from hand-authored nodes and edges, validated,
//! and then only read. It never computes positions; those are fixed at authoring time
//! and handed to the graph renderer as-is.

use crate::error::MalformedDiagramError;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

pub mod conversion;
pub mod definition;
mod validate;

pub use conversion::*;
pub use definition::*;

use validate::GraphIndex;

/// A validated, immutable pipeline diagram.
///
/// Invariants, checked by [`PipelineDiagram::build`]:
/// - node ids and edge ids are unique, and every edge endpoint names a node
/// - exactly one entry node (no incoming edges) and one terminal node (no outgoing edges)
/// - every node is reachable from the entry and can reach the terminal
/// - no cycles
/// - decision nodes label every branch, and all-labeled branches use distinct labels
#[derive(Debug, Clone, Serialize)]
pub struct PipelineDiagram {
    nodes: Vec<PipelineNode>,
    edges: Vec<PipelineEdge>,
    #[serde(skip)]
    index: GraphIndex,
}

impl PipelineDiagram {
    pub fn build(
        nodes: Vec<PipelineNode>,
        edges: Vec<PipelineEdge>,
    ) -> Result<Self, MalformedDiagramError> {
        let index = validate::validate(&nodes, &edges)?;
        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            entry = %nodes[index.entry].id,
            terminal = %nodes[index.terminal].id,
            "pipeline diagram validated"
        );
        Ok(Self {
            nodes,
            edges,
            index,
        })
    }

    pub fn from_definition(definition: DiagramDefinition) -> Result<Self, MalformedDiagramError> {
        Self::build(definition.nodes, definition.edges)
    }

    pub fn nodes(&self) -> &[PipelineNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PipelineEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&PipelineNode> {
        self.index.node(id).map(|i| &self.nodes[i])
    }

    pub fn entry(&self) -> &PipelineNode {
        &self.nodes[self.index.entry]
    }

    pub fn terminal(&self) -> &PipelineNode {
        &self.nodes[self.index.terminal]
    }

    /// Nodes of one kind, in declaration order. The iterator can be cloned to restart it.
    pub fn nodes_by_kind(&self, kind: NodeKind) -> impl Iterator<Item = &PipelineNode> + Clone {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }

    /// Edges leaving `node_id`, in declaration order. Empty for unknown ids.
    pub fn outgoing<'a>(
        &'a self,
        node_id: &str,
    ) -> impl Iterator<Item = &'a PipelineEdge> + Clone + use<'a> {
        self.edges_at(&self.index.outgoing, node_id)
    }

    /// Edges arriving at `node_id`, in declaration order. Empty for unknown ids.
    pub fn incoming<'a>(
        &'a self,
        node_id: &str,
    ) -> impl Iterator<Item = &'a PipelineEdge> + Clone + use<'a> {
        self.edges_at(&self.index.incoming, node_id)
    }

    fn edges_at<'a>(
        &'a self,
        adjacency: &'a [Vec<usize>],
        node_id: &str,
    ) -> impl Iterator<Item = &'a PipelineEdge> + Clone + use<'a> {
        let positions: &'a [usize] = self
            .index
            .node(node_id)
            .and_then(|i| adjacency.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default();
        positions.iter().map(move |&e| &self.edges[e])
    }

    /// Nodes ordered so every edge points forward. The entry comes first.
    pub fn topological_order(&self) -> impl Iterator<Item = &PipelineNode> + Clone {
        self.index.topological.iter().map(move |&i| &self.nodes[i])
    }

    /// Nodes that fan out into mutually exclusive labeled branches.
    pub fn decision_nodes(&self) -> impl Iterator<Item = &PipelineNode> + Clone {
        self.nodes.iter().enumerate().filter_map(move |(i, node)| {
            let branches = &self.index.outgoing[i];
            let labeled = branches
                .iter()
                .all(|&e| self.edges[e].branch_label().is_some());
            (node.kind == NodeKind::Decision || (branches.len() > 1 && labeled)).then_some(node)
        })
    }

    pub fn animated_edges(&self) -> impl Iterator<Item = &PipelineEdge> + Clone {
        self.edges.iter().filter(|edge| edge.animated)
    }

    /// Kinds present in the diagram with their node counts, in `NodeKind::ALL` order.
    pub fn kinds(&self) -> Vec<(NodeKind, usize)> {
        let counts = self.nodes.iter().map(|node| node.kind).counts();
        NodeKind::ALL
            .into_iter()
            .filter_map(|kind| counts.get(&kind).map(|&count| (kind, count)))
            .collect()
    }

    /// JSON payload for the graph renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
