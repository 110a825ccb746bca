use super::definition::{DiagramDefinition, NodeKind, NodeRole, PipelineEdge, PipelineNode, Position};
use crate::error::DiagramConversionError;
use serde::Deserialize;

/// A trait for custom diagram formats that can be converted into a `DiagramDefinition`.
///
/// Implement it on whatever structs your authoring tool exports; `PipelineDiagram`
/// only ever sees the canonical definition.
///
/// # Example
///
/// ```rust
/// use upfly_showcase::prelude::*;
/// use upfly_showcase::error::DiagramConversionError;
///
/// struct Steps(Vec<&'static str>);
///
/// impl IntoDiagram for Steps {
///     fn into_diagram(self) -> std::result::Result<DiagramDefinition, DiagramConversionError> {
///         let last = self.0.len().saturating_sub(1);
///         let nodes = self
///             .0
///             .iter()
///             .enumerate()
///             .map(|(i, label)| {
///                 let role = match i {
///                     0 => NodeRole::Entry,
///                     i if i == last => NodeRole::Terminal,
///                     _ => NodeRole::Step,
///                 };
///                 PipelineNode::new(i.to_string(), *label, NodeKind::Processing).with_role(role)
///             })
///             .collect();
///         let edges = (1..self.0.len())
///             .map(|i| PipelineEdge::new(format!("e{i}"), (i - 1).to_string(), i.to_string()))
///             .collect();
///         Ok(DiagramDefinition { nodes, edges })
///     }
/// }
///
/// let definition = Steps(vec!["Intake", "Convert", "Respond"]).into_diagram().unwrap();
/// let diagram = PipelineDiagram::from_definition(definition).unwrap();
/// assert_eq!(diagram.terminal().label, "Respond");
/// ```
pub trait IntoDiagram {
    /// Consumes the object and converts it into a diagram definition.
    fn into_diagram(self) -> Result<DiagramDefinition, DiagramConversionError>;
}

// --- Flow document format ---
// Mirrors the node/edge shape the graph renderer consumes, so assets can be authored
// in the renderer's own vocabulary.

/// A diagram as authored for the graph renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocument {
    pub nodes: Vec<FlowDocumentNode>,
    pub edges: Vec<FlowDocumentEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocumentNode {
    pub id: String,
    /// `"input"` marks the entry, `"output"` the terminal; anything else is a step.
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    pub data: FlowDocumentNodeData,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocumentNodeData {
    pub label: String,
    #[serde(default)]
    pub sublabel: Option<String>,
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocumentEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

impl FlowDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn role_for(node_id: &str, node_type: Option<&str>) -> Result<NodeRole, DiagramConversionError> {
    match node_type {
        None | Some("default") => Ok(NodeRole::Step),
        Some("input") => Ok(NodeRole::Entry),
        Some("output") => Ok(NodeRole::Terminal),
        Some(other) => Err(DiagramConversionError::UnknownNodeType {
            node_id: node_id.to_string(),
            node_type: other.to_string(),
        }),
    }
}

impl IntoDiagram for FlowDocument {
    fn into_diagram(self) -> Result<DiagramDefinition, DiagramConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw_node| {
                let role = role_for(&raw_node.id, raw_node.node_type.as_deref())?;
                let kind = raw_node.data.kind.parse::<NodeKind>().map_err(|kind| {
                    DiagramConversionError::UnknownKind {
                        node_id: raw_node.id.clone(),
                        kind,
                    }
                })?;
                Ok::<_, DiagramConversionError>(PipelineNode {
                    id: raw_node.id,
                    label: raw_node.data.label,
                    sublabel: raw_node.data.sublabel,
                    kind,
                    role,
                    position: raw_node.position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|raw_edge| PipelineEdge {
                id: raw_edge.id,
                source: raw_edge.source,
                target: raw_edge.target,
                label: raw_edge.label,
                animated: raw_edge.animated,
            })
            .collect();

        Ok(DiagramDefinition { nodes, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "nodes": [
            { "id": "1", "type": "input", "data": { "label": "upflyUpload()", "kind": "entry" }, "position": { "x": 450, "y": 0 } },
            { "id": "2", "type": "output", "data": { "label": "Response", "sublabel": "req.files", "kind": "success" }, "position": { "x": 450, "y": 90 } }
        ],
        "edges": [
            { "id": "e1-2", "source": "1", "target": "2", "animated": true }
        ]
    }"#;

    #[test]
    fn test_flow_document_conversion() {
        let definition = FlowDocument::from_json(DOC).unwrap().into_diagram().unwrap();

        assert_eq!(definition.nodes[0].role, NodeRole::Entry);
        assert_eq!(definition.nodes[1].role, NodeRole::Terminal);
        assert_eq!(definition.nodes[1].kind, NodeKind::Success);
        assert_eq!(definition.nodes[1].sublabel.as_deref(), Some("req.files"));
        assert_eq!(definition.nodes[0].position, Position::new(450.0, 0.0));
        assert!(definition.edges[0].animated);
        assert!(definition.edges[0].label.is_none());
    }

    #[test]
    fn test_unknown_kind_is_reported() {
        let doc = DOC.replace("\"kind\": \"success\"", "\"kind\": \"teapot\"");
        let result = FlowDocument::from_json(&doc).unwrap().into_diagram();
        assert_eq!(
            result,
            Err(DiagramConversionError::UnknownKind {
                node_id: "2".to_string(),
                kind: "teapot".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_node_type_is_reported() {
        let doc = DOC.replace("\"type\": \"input\"", "\"type\": \"group\"");
        let result = FlowDocument::from_json(&doc).unwrap().into_diagram();
        assert!(matches!(
            result,
            Err(DiagramConversionError::UnknownNodeType { node_type, .. }) if node_type == "group"
        ));
    }
}
