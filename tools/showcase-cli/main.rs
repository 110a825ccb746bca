use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::fs;
use std::rc::Rc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use upfly_showcase::catalog;
use upfly_showcase::prelude::{DemoSelector, PipelineDiagram, TimerQueue, WidgetDefinition};

/// Validate and inspect showcase widgets and pipeline diagrams
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a diagram and print its structure
    Diagram {
        /// Bundled diagram name or path to a flow document JSON file
        source: String,
    },
    /// Validate a widget and simulate its auto-advance
    Widget {
        /// Bundled widget name or path to a widget definition JSON file
        source: String,
        /// Number of auto-advance ticks to simulate
        #[arg(short, long, default_value_t = 4)]
        ticks: usize,
    },
    /// List the bundled assets
    Catalog,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Diagram { source } => run_diagram(&source),
        Command::Widget { source, ticks } => run_widget(&source, ticks),
        Command::Catalog => run_catalog(),
    }
}

/// Loads a bundled asset by name, or falls back to reading `source` as a file path.
fn load_source(source: &str, bundled: &[&str]) -> (String, Option<String>) {
    if bundled.contains(&source) {
        return (source.to_string(), None);
    }
    let json = fs::read_to_string(source)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", source, e)));
    (source.to_string(), Some(json))
}

fn run_diagram(source: &str) {
    let bundled: Vec<&str> = catalog::diagram_names().collect();
    let (name, json) = load_source(source, &bundled);
    let result = match json {
        Some(json) => catalog::parse_diagram(&name, &json),
        None => catalog::diagram(&name),
    };
    let diagram = result.unwrap_or_else(|e| exit_with_error(&e.to_string()));

    print_diagram(&name, &diagram);
}

fn print_diagram(name: &str, diagram: &PipelineDiagram) {
    println!("Diagram '{}' is valid.", name);
    println!(
        "  {} nodes, {} edges ({} animated)",
        diagram.nodes().len(),
        diagram.edges().len(),
        diagram.animated_edges().count()
    );
    println!(
        "  Entry: {} ({})  Terminal: {} ({})",
        diagram.entry().label,
        diagram.entry().id,
        diagram.terminal().label,
        diagram.terminal().id
    );

    println!("\n--- Legend ---");
    for (kind, count) in diagram.kinds() {
        println!("  {:<11} {}  x{}", kind, kind.color(), count);
    }

    println!("\n--- Pipeline Order ---");
    for node in diagram.topological_order() {
        let sublabel = node.sublabel.as_deref().unwrap_or("");
        println!("  [{:>3}] {:<22} {}", node.id, node.label, sublabel);
    }

    println!("\n--- Branches ---");
    for node in diagram.decision_nodes() {
        let branches = diagram
            .outgoing(&node.id)
            .map(|edge| {
                format!(
                    "{} -> {}",
                    edge.branch_label().unwrap_or("?"),
                    edge.target
                )
            })
            .join(", ");
        println!("  {}: {}", node.label, branches);
    }
}

fn run_widget(source: &str, ticks: usize) {
    let bundled: Vec<&str> = catalog::widget_names().collect();
    let (name, json) = load_source(source, &bundled);
    let json = match json {
        Some(json) => json,
        None => catalog::widget_json(&name)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
            .to_string(),
    };
    let (definition, mut selector) = catalog::parse_widget(&name, &json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    print_widget(&definition, &selector);
    simulate(&mut selector, ticks);
}

fn print_widget(definition: &WidgetDefinition, selector: &DemoSelector) {
    println!("Widget '{}' is valid.", definition.id);
    for (index, item) in selector.tabs() {
        let children = item.children().iter().map(|c| c.title.as_str()).join(" | ");
        println!(
            "  {}: {} - {} ({} lines, {}){}",
            index,
            item.title,
            item.description,
            item.line_count(),
            item.language,
            if children.is_empty() {
                String::new()
            } else {
                format!(" [{}]", children)
            }
        );
    }
}

fn simulate(selector: &mut DemoSelector, ticks: usize) {
    let Some(period) = selector.auto_advance() else {
        println!("\nWidget does not auto-advance.");
        return;
    };

    println!("\n--- Auto-advance every {:?} ---", period);
    let clock = Rc::new(TimerQueue::new());
    selector.mount(clock.clone());

    println!("  {:>8}  {}", format!("{:?}", Duration::ZERO), selector.get_active().title);
    for _ in 0..ticks {
        for handle in clock.advance(period) {
            selector.on_timer(handle);
        }
        let elapsed = format!("{:?}", clock.now());
        println!("  {:>8}  {}", elapsed, selector.get_active().title);
    }

    selector.unmount();
    println!("Timers left after unmount: {}", clock.pending());
}

fn run_catalog() {
    println!("Widgets:");
    for name in catalog::widget_names() {
        match catalog::widget(name) {
            Ok(definition) => println!("  {:<18} {} items", name, definition.items.len()),
            Err(e) => println!("  {:<18} INVALID: {}", name, e),
        }
    }
    println!("Diagrams:");
    for name in catalog::diagram_names() {
        match catalog::diagram(name) {
            Ok(diagram) => println!(
                "  {:<18} {} nodes, {} edges",
                name,
                diagram.nodes().len(),
                diagram.edges().len()
            ),
            Err(e) => println!("  {:<18} INVALID: {}", name, e),
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
