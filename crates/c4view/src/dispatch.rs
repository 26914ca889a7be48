use crate::FallbackError;
use c4view_core::Engine;
use c4view_render::text::TextMeasurer;
use c4view_render::{RenderOptions, render_parsed};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Renderer for diagram dialects other than C4.
pub trait FallbackRenderer {
    fn render(&self, code: &str) -> Result<String, FallbackError>;
}

impl<F> FallbackRenderer for F
where
    F: Fn(&str) -> Result<String, FallbackError>,
{
    fn render(&self, code: &str) -> Result<String, FallbackError> {
        self(code)
    }
}

/// Fallback used when no general-purpose renderer is configured: every dialect is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedDialect;

impl FallbackRenderer for UnsupportedDialect {
    fn render(&self, code: &str) -> Result<String, FallbackError> {
        let diagram_type = code
            .split_whitespace()
            .next()
            .unwrap_or("unknown")
            .to_string();
        Err(FallbackError::UnsupportedDiagram { diagram_type })
    }
}

/// Routes diagram source to the C4 renderer, or to the fallback for any other dialect.
#[derive(Clone)]
pub struct Dispatcher {
    engine: Engine,
    options: RenderOptions,
    fallback: Arc<dyn FallbackRenderer + Send + Sync>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            engine: Engine::new(),
            options: RenderOptions::default(),
            fallback: Arc::new(UnsupportedDialect),
        }
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `engine` for detection and derives layout options from its site config.
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.options = RenderOptions {
            text_measurer: Arc::clone(&self.options.text_measurer),
            ..RenderOptions::from_config(engine.site_config())
        };
        self.engine = engine;
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackRenderer + Send + Sync>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.options.text_measurer = measurer;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Always produces displayable text: C4 art, the fallback's output, or an error box.
    pub fn render_diagram(&self, code: &str) -> String {
        if let Some(parsed) = self.engine.parse_diagram(code) {
            return render_parsed(&parsed, &self.options);
        }

        tracing::debug!("not a C4 diagram; delegating to fallback renderer");
        match self.fallback.render(code) {
            Ok(out) => out,
            Err(err) => {
                tracing::debug!(error = %err, "fallback renderer failed");
                error_box(code, &err.to_string())
            }
        }
    }
}

/// Frames the source lines under an `Error: <message>` heading so the reader still sees the
/// diagram text.
pub fn error_box(code: &str, message: &str) -> String {
    let heading = format!("Error: {message}");
    let lines = code.trim().split('\n').collect::<Vec<_>>();
    let width = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(*l))
        .max()
        .unwrap_or(0)
        .max(UnicodeWidthStr::width(heading.as_str()));

    let border = format!("+{}+", "-".repeat(width + 2));
    let pad_line = |line: &str| {
        let fill = width.saturating_sub(UnicodeWidthStr::width(line));
        format!("| {line}{} |", " ".repeat(fill))
    };

    let mut out = Vec::with_capacity(lines.len() + 4);
    out.push(border.clone());
    out.push(pad_line(heading.as_str()));
    out.push(pad_line(""));
    out.extend(lines.iter().copied().map(pad_line));
    out.push(border);
    out.join("\n")
}
