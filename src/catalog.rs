//! Widget and diagram assets bundled with the crate.
//!
//! These are the demo widgets and architecture diagrams the showcase page mounts.
//! They are plain JSON so they can be edited without touching code; every one of them
//! is validated by the test suite.

use crate::diagram::{FlowDocument, IntoDiagram, PipelineDiagram};
use crate::error::CatalogError;
use crate::selector::{DemoSelector, WidgetDefinition};

const WIDGETS: &[(&str, &str)] = &[
    ("hero", include_str!("../assets/widgets/hero.json")),
    ("code-examples", include_str!("../assets/widgets/code-examples.json")),
    ("cloud-providers", include_str!("../assets/widgets/cloud-providers.json")),
    ("solution", include_str!("../assets/widgets/solution.json")),
    ("install", include_str!("../assets/widgets/install.json")),
    ("install-commands", include_str!("../assets/widgets/install-commands.json")),
    ("features", include_str!("../assets/widgets/features.json")),
];

const DIAGRAMS: &[(&str, &str)] = &[
    ("upload-pipeline", include_str!("../assets/diagrams/upload-pipeline.json")),
    ("cloud-upload", include_str!("../assets/diagrams/cloud-upload.json")),
];

pub fn widget_names() -> impl Iterator<Item = &'static str> {
    WIDGETS.iter().map(|(name, _)| *name)
}

pub fn diagram_names() -> impl Iterator<Item = &'static str> {
    DIAGRAMS.iter().map(|(name, _)| *name)
}

fn find(table: &[(&'static str, &'static str)], name: &str) -> Result<&'static str, CatalogError> {
    table
        .iter()
        .find(|(asset, _)| *asset == name)
        .map(|(_, json)| *json)
        .ok_or_else(|| CatalogError::UnknownAsset(name.to_string()))
}

/// Parses a widget definition and builds its selector in one pass.
pub fn parse_widget(
    name: &str,
    json: &str,
) -> Result<(WidgetDefinition, DemoSelector), CatalogError> {
    let definition = WidgetDefinition::from_json(json).map_err(|source| CatalogError::Parse {
        name: name.to_string(),
        source,
    })?;
    let selector = definition
        .to_selector()
        .map_err(|source| CatalogError::Widget {
            name: name.to_string(),
            source,
        })?;
    Ok((definition, selector))
}

/// Parses a flow document and validates the resulting diagram.
pub fn parse_diagram(name: &str, json: &str) -> Result<PipelineDiagram, CatalogError> {
    let document = FlowDocument::from_json(json).map_err(|source| CatalogError::Parse {
        name: name.to_string(),
        source,
    })?;
    let definition = document
        .into_diagram()
        .map_err(|source| CatalogError::Conversion {
            name: name.to_string(),
            source,
        })?;
    PipelineDiagram::from_definition(definition).map_err(|source| CatalogError::Diagram {
        name: name.to_string(),
        source,
    })
}

/// Raw JSON of a bundled widget.
pub fn widget_json(name: &str) -> Result<&'static str, CatalogError> {
    find(WIDGETS, name)
}

pub fn widget(name: &str) -> Result<WidgetDefinition, CatalogError> {
    parse_widget(name, find(WIDGETS, name)?).map(|(definition, _)| definition)
}

/// An unmounted selector for a bundled widget.
pub fn selector(name: &str) -> Result<DemoSelector, CatalogError> {
    parse_widget(name, find(WIDGETS, name)?).map(|(_, selector)| selector)
}

pub fn diagram(name: &str) -> Result<PipelineDiagram, CatalogError> {
    parse_diagram(name, find(DIAGRAMS, name)?)
}
