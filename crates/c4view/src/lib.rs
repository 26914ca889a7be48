#![forbid(unsafe_code)]

//! `c4view` renders C4 architecture diagrams as fixed-width text art for terminals.
//!
//! # Features
//!
//! - `render` (default): enable text-art rendering (`c4view::render`), the diagram
//!   dispatcher and markdown block substitution

pub use c4view_core::*;

#[cfg(feature = "render")]
mod dispatch;
#[cfg(feature = "render")]
pub mod markdown;

#[cfg(feature = "render")]
pub use dispatch::{Dispatcher, FallbackRenderer, UnsupportedDialect, error_box};

#[cfg(feature = "render")]
pub mod render {
    pub use c4view_render::c4::{
        render_boundary, render_box, render_relationships, render_ungrouped_grid,
    };
    pub use c4view_render::text::icons::{ELEMENT_ICON, PERSON_ICON, icon_for};
    pub use c4view_render::text::{CharCountMeasurer, TextMeasurer, UnicodeWidthMeasurer};
    pub use c4view_render::{LayoutConfig, RenderOptions, render, render_parsed, render_with};
}

/// Failure reported by a non-C4 renderer; shown to the reader inside an error box.
#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("Unsupported diagram type: {diagram_type}")]
    UnsupportedDiagram { diagram_type: String },

    #[error("{message}")]
    Render { message: String },
}
