//! Common test utilities for building widgets, diagrams and host services.
use std::future::Future;
use upfly_showcase::clipboard::Clipboard;
use upfly_showcase::diagram::{NodeKind, NodeRole, PipelineEdge, PipelineNode};
use upfly_showcase::error::ClipboardWriteError;
use upfly_showcase::selector::DemoItem;

/// `n` single-line items titled "Slide 0", "Slide 1", ...
#[allow(dead_code)]
pub fn demo_items(n: usize) -> Vec<DemoItem> {
    (0..n)
        .map(|i| {
            DemoItem::new(
                format!("Slide {}", i),
                format!("Description {}", i),
                format!("upflyUpload({{ slide: {} }})", i),
            )
        })
        .collect()
}

/// A clipboard that refuses every write, like a browser outside a secure context.
#[allow(dead_code)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> impl Future<Output = Result<(), ClipboardWriteError>> {
        std::future::ready(Err(ClipboardWriteError::Unavailable))
    }
}

/// A small but complete pipeline:
///
/// ```text
/// intake -> check --yes--> convert -> router -> response
///                 \--no----------------^
/// ```
#[allow(dead_code)]
pub fn pipeline_nodes() -> Vec<PipelineNode> {
    vec![
        PipelineNode::new("intake", "upflyUpload()", NodeKind::Entry)
            .with_sublabel("Express Middleware")
            .with_role(NodeRole::Entry)
            .at(450.0, 0.0),
        PipelineNode::new("check", "Need Conversion?", NodeKind::Decision).at(450.0, 90.0),
        PipelineNode::new("convert", "Sharp Pipeline", NodeKind::Processing).at(300.0, 180.0),
        PipelineNode::new("router", "Storage Router", NodeKind::Router).at(450.0, 270.0),
        PipelineNode::new("response", "Response", NodeKind::Success)
            .with_role(NodeRole::Terminal)
            .at(450.0, 360.0),
    ]
}

#[allow(dead_code)]
pub fn pipeline_edges() -> Vec<PipelineEdge> {
    vec![
        PipelineEdge::new("e-intake-check", "intake", "check").animated(),
        PipelineEdge::new("e-check-convert", "check", "convert")
            .labeled("yes")
            .animated(),
        PipelineEdge::new("e-check-router", "check", "router").labeled("no"),
        PipelineEdge::new("e-convert-router", "convert", "router").animated(),
        PipelineEdge::new("e-router-response", "router", "response"),
    ]
}
