//! # preflight-core
//!
//! Platform-agnostic checklist typesetting.
//!
//! The pipeline parses checklist markup into a document tree, lays the tree
//! out page by page and hands the drawing to a page surface: either the
//! in-memory [`RecordingSurface`] or the PDF writing [`LopdfSurface`].
//! Output goes to any `std::io::Write`; this crate does not touch the
//! filesystem.

// Re-export foundation crates
pub use preflight_model as model;
pub use preflight_style as style;
pub use preflight_traits as traits;
pub use preflight_types as types;

// Re-export parsing, algorithm and render crates
pub use preflight_layout as layout;
pub use preflight_markup as markup;
pub use preflight_render_core as render;
pub use preflight_render_lopdf as pdf;

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    Generated, document_title, document_to_json, layout_document, markup_to_document, markup_to_pdf,
    parse_markup, render_pdf,
};

pub use preflight_model::{CenteredText, Checklist, ChecklistSection, SectionEntry, SectionItem};
pub use preflight_render_core::{PageElement, PageSurface, PaginatedDocument, RecordingSurface};
pub use preflight_render_lopdf::LopdfSurface;
pub use preflight_style::Configuration;
