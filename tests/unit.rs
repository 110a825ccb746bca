//! Unit tests for error messages and small value types.
use upfly_showcase::diagram::{NodeKind, PipelineEdge};
use upfly_showcase::error::{
    ClipboardWriteError, MalformedDiagramError, OutOfRangeError, WidgetConfigError,
};

#[test]
fn test_error_display() {
    let err = OutOfRangeError { index: 7, len: 4 };
    assert!(err.to_string().contains('7'));
    assert!(err.to_string().contains('4'));

    let err = MalformedDiagramError::DanglingEdge {
        edge_id: "e8-13".to_string(),
        missing_node_id: "13".to_string(),
    };
    assert!(err.to_string().contains("e8-13"));
    assert!(err.to_string().contains("'13'"));

    let err = MalformedDiagramError::EntryCount {
        found: vec!["1".to_string(), "c1".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Expected exactly one entry node, found 2 (1, c1)"
    );

    let err = WidgetConfigError::HighlightOutOfBounds {
        title: "Upload to Cloud".to_string(),
        line: 14,
        line_count: 11,
    };
    assert!(err.to_string().contains("Upload to Cloud"));
    assert!(err.to_string().contains("14"));

    assert!(ClipboardWriteError::PermissionDenied
        .to_string()
        .contains("denied"));
}

#[test]
fn test_node_kind_display() {
    assert_eq!(format!("{}", NodeKind::Fallback), "fallback");
    assert_eq!("router".parse::<NodeKind>(), Ok(NodeKind::Router));
}

#[test]
fn test_edge_builder() {
    let edge = PipelineEdge::new("e3-4", "3", "4")
        .labeled("safeFile: true")
        .animated();
    assert_eq!(edge.branch_label(), Some("safeFile: true"));
    assert!(edge.animated);
}
