use crate::error::WidgetConfigError;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "javascript".to_string()
}

/// One selectable slide or tab of a demo widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoItem {
    pub title: String,
    pub description: String,
    /// The literal text shown for this item, usually a code sample.
    pub content: String,
    /// Language tag handed to the syntax highlighter.
    #[serde(default = "default_language")]
    pub language: String,
    /// 1-based line numbers of `content` to emphasize.
    #[serde(default, alias = "highlight", skip_serializing_if = "Vec::is_empty")]
    pub highlight_markers: Vec<u32>,
    /// Provider variants offered by this item, nested one level deep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DemoItem>>,
}

/// What the text-rendering collaborator receives for the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeView<'a> {
    pub text: &'a str,
    pub highlight_lines: &'a [u32],
    pub language: &'a str,
}

impl DemoItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: content.into(),
            language: default_language(),
            highlight_markers: Vec::new(),
            children: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_highlight(mut self, lines: impl IntoIterator<Item = u32>) -> Self {
        self.highlight_markers = lines.into_iter().collect();
        self
    }

    pub fn with_children(mut self, children: Vec<DemoItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Number of lines in `content`, counted the way a code view numbers them.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn children(&self) -> &[DemoItem] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn code_view(&self) -> CodeView<'_> {
        CodeView {
            text: &self.content,
            highlight_lines: &self.highlight_markers,
            language: &self.language,
        }
    }

    /// Checks the item and its sub-tabs.
    pub fn validate(&self) -> Result<(), WidgetConfigError> {
        self.validate_leaf()?;
        if let Some(children) = &self.children {
            if children.is_empty() {
                return Err(WidgetConfigError::EmptyChildren {
                    title: self.title.clone(),
                });
            }
            for child in children {
                if child.children.is_some() {
                    return Err(WidgetConfigError::NestedTooDeep {
                        title: self.title.clone(),
                        child: child.title.clone(),
                    });
                }
                child.validate_leaf()?;
            }
        }
        Ok(())
    }

    fn validate_leaf(&self) -> Result<(), WidgetConfigError> {
        if self.content.trim().is_empty() {
            return Err(WidgetConfigError::EmptyContent {
                title: self.title.clone(),
            });
        }
        let line_count = self.line_count();
        if let Some(&line) = self
            .highlight_markers
            .iter()
            .find(|&&line| line == 0 || line as usize > line_count)
        {
            return Err(WidgetConfigError::HighlightOutOfBounds {
                title: self.title.clone(),
                line,
                line_count,
            });
        }
        Ok(())
    }
}
