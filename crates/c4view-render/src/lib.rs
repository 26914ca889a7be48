#![forbid(unsafe_code)]

//! Fixed-grid text-art rendering for parsed C4 diagrams.

pub mod c4;
pub mod model;
pub mod text;

pub use crate::model::LayoutConfig;

use crate::text::{TextMeasurer, UnicodeWidthMeasurer};
use c4view_core::{C4Config, ParsedDiagram, is_c4, parse};
use std::sync::Arc;

#[derive(Clone)]
pub struct RenderOptions {
    pub layout: LayoutConfig,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            text_measurer: Arc::new(UnicodeWidthMeasurer),
        }
    }
}

impl RenderOptions {
    /// Options with layout overrides read from the `c4.*` keys of `config`.
    pub fn from_config(config: &C4Config) -> Self {
        Self {
            layout: LayoutConfig::from_config(config),
            ..Self::default()
        }
    }

    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.text_measurer = measurer;
        self
    }
}

/// Renders C4 source to text art, or returns `None` when the text is not a C4 diagram so the
/// caller can hand it to another renderer.
pub fn render(text: &str) -> Option<String> {
    render_with(text, &RenderOptions::default())
}

pub fn render_with(text: &str, options: &RenderOptions) -> Option<String> {
    if !is_c4(text) {
        return None;
    }
    let parsed = parse(text);
    tracing::debug!(
        entities = parsed.entities.len(),
        boundaries = parsed.boundaries.len(),
        relationships = parsed.relationships.len(),
        "rendering C4 diagram"
    );
    Some(render_parsed(&parsed, options))
}

pub fn render_parsed(parsed: &ParsedDiagram, options: &RenderOptions) -> String {
    c4::render_c4_text(parsed, options)
}
