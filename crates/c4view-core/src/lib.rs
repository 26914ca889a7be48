#![forbid(unsafe_code)]

//! Lenient C4 diagram parser + semantic model (headless).
//!
//! Design goals:
//! - never fail on ill-formed input: unrecognized statements are dropped
//! - deterministic, pure outputs (no state survives across calls)

pub mod config;
pub mod detect;
pub mod diagram;
pub mod diagrams;
pub mod error;

pub use config::C4Config;
pub use detect::{DetectTypeError, Detector, DetectorRegistry, detect_kind, is_c4};
pub use diagram::{
    Boundary, BoundaryKind, C4Kind, Entity, EntityKind, ParsedDiagram, Relationship,
};
pub use diagrams::c4::{Statement, classify_statement};
pub use error::{Error, Result};

/// Parses C4 source without running detection first.
pub fn parse(text: &str) -> ParsedDiagram {
    diagrams::c4::parse_c4(text)
}

#[derive(Debug, Clone)]
pub struct Engine {
    registry: DetectorRegistry,
    site_config: C4Config,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            registry: DetectorRegistry::c4(),
            site_config: C4Config::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the site-level config consulted by renderers (e.g. `c4.boxWidth`).
    pub fn with_site_config(mut self, site_config: C4Config) -> Self {
        self.site_config = site_config;
        self
    }

    pub fn site_config(&self) -> &C4Config {
        &self.site_config
    }

    pub fn detect_type(&self, text: &str) -> Result<&'static str> {
        Ok(self.registry.detect_type(text)?)
    }

    /// Returns `None` when no registered dialect accepts the text.
    pub fn parse_diagram(&self, text: &str) -> Option<ParsedDiagram> {
        let diagram_type = self.detect_type(text).ok()?;
        tracing::debug!(diagram_type, "parsing diagram");
        Some(parse(text))
    }
}

#[cfg(test)]
mod tests;
