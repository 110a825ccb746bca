//! Integration tests for the bundled catalog
//!
//! End-to-end checks that the widgets and diagrams the showcase page mounts load,
//! validate and behave as the page expects.
//!
mod common;
use std::rc::Rc;
use std::time::Duration;
use tokio_test::block_on;
use upfly_showcase::catalog;
use upfly_showcase::clipboard::MemoryClipboard;
use upfly_showcase::diagram::{NodeKind, NodeRole};
use upfly_showcase::timer::TimerQueue;

#[test]
fn test_hero_carousel_cycles_every_three_and_a_half_seconds() {
    let clock = Rc::new(TimerQueue::new());
    let mut hero = catalog::selector("hero").expect("hero widget loads");
    assert_eq!(hero.len(), 4);
    assert_eq!(hero.auto_advance(), Some(Duration::from_millis(3500)));
    hero.mount(clock.clone());

    let mut titles = vec![hero.get_active().title.clone()];
    for _ in 0..4 {
        for handle in clock.advance(Duration::from_millis(3500)) {
            hero.on_timer(handle);
        }
        titles.push(hero.get_active().title.clone());
    }

    assert_eq!(
        titles,
        vec![
            "Dead Simple Start",
            "Upload to Cloud",
            "Built-in Reliability",
            "Multiple Files, Zero Hassle",
            "Dead Simple Start",
        ]
    );
}

#[test]
fn test_hero_highlights_point_at_real_lines() {
    let hero = catalog::widget("hero").unwrap();
    for item in &hero.items {
        let lines: Vec<&str> = item.content.lines().collect();
        assert!(!item.highlight_markers.is_empty(), "{} has highlights", item.title);
        for &marker in &item.highlight_markers {
            assert!(lines.get(marker as usize - 1).is_some());
        }
    }

    let first = &hero.items[0];
    let highlighted: Vec<&str> = first
        .highlight_markers
        .iter()
        .filter_map(|&m| first.content.lines().nth(m as usize - 1))
        .collect();
    assert!(highlighted[0].contains("format: 'webp'"));
}

#[test]
fn test_solution_cloud_tab_offers_providers() {
    let mut solution = catalog::selector("solution").unwrap();
    assert_eq!(solution.auto_advance(), None);

    solution.select(1).unwrap();
    let providers: Vec<&str> = solution
        .get_active()
        .children()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(providers, vec!["Cloudinary", "AWS S3", "Google Cloud Storage"]);

    solution.select_child(2).unwrap();
    assert!(solution.active_view().text.contains("cloudProvider: 'gcs'"));
}

#[test]
fn test_install_command_copy_feedback() {
    let clock = Rc::new(TimerQueue::new());
    let clipboard = MemoryClipboard::new();
    let mut commands = catalog::selector("install-commands").unwrap();
    commands.mount(clock.clone());

    commands.select(2).unwrap();
    let view = commands.active_view();
    assert_eq!(view.language, "bash");
    let text = view.text.to_string();
    let label = commands.get_active().title.clone();

    block_on(commands.copy(&clipboard, &text, label)).unwrap();
    assert!(commands.is_copied("pnpm"));
    assert_eq!(clipboard.contents().as_deref(), Some("pnpm add upfly multer"));

    for handle in clock.advance(Duration::from_millis(2000)) {
        commands.on_timer(handle);
    }
    assert!(!commands.is_copied("pnpm"));
}

#[test]
fn test_upload_pipeline_shape() {
    let pipeline = catalog::diagram("upload-pipeline").unwrap();
    assert_eq!(pipeline.nodes().len(), 15);
    assert_eq!(pipeline.edges().len(), 20);
    assert_eq!(pipeline.entry().role, NodeRole::Entry);
    assert_eq!(pipeline.terminal().label, "Response");

    let decisions: Vec<&str> = pipeline
        .nodes_by_kind(NodeKind::Decision)
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(decisions, vec!["safeFile Check", "Need Conversion?"]);

    let router_branches: Vec<&str> = pipeline
        .outgoing("9")
        .filter_map(|e| e.branch_label())
        .collect();
    assert_eq!(router_branches, vec!["memory", "disk", "cloud"]);

    // The backup buffer is fed both by the tee and by the fallback path.
    let backup_sources: Vec<&str> = pipeline.incoming("5").map(|e| e.source.as_str()).collect();
    assert_eq!(backup_sources, vec!["4", "14"]);

    let order: Vec<&str> = pipeline.topological_order().map(|n| n.id.as_str()).collect();
    assert_eq!(order.first(), Some(&"1"));
    assert_eq!(order.last(), Some(&"15"));
}

#[test]
fn test_cloud_upload_detail() {
    let detail = catalog::diagram("cloud-upload").unwrap();
    assert_eq!(detail.entry().id, "c1");
    assert_eq!(detail.terminal().id, "c6");

    let failed = detail.node("c4").unwrap();
    assert_eq!(failed.kind, NodeKind::Decision);
    let labels: Vec<&str> = detail.outgoing("c4").filter_map(|e| e.branch_label()).collect();
    assert_eq!(labels, vec!["yes", "no"]);
}

#[test]
fn test_every_widget_builds_and_mounts_cleanly() {
    let clock = Rc::new(TimerQueue::new());
    for name in catalog::widget_names() {
        let mut selector = catalog::selector(name).unwrap();
        selector.mount(clock.clone());
        selector.unmount();
    }
    assert_eq!(clock.pending(), 0);
}

#[test]
fn test_feature_categories_tab_strip() {
    let mut features = catalog::selector("features").unwrap();
    assert_eq!(features.auto_advance(), None);
    let categories: Vec<&str> = features.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        categories,
        vec!["Performance", "Security", "Infrastructure", "Developer Experience"]
    );

    features.select(1).unwrap();
    assert!(features.active_view().text.contains("SOC 2 Compliance"));
}
