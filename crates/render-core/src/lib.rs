//! Core rendering abstractions.
//!
//! This crate provides:
//! - the `PageSurface` trait, the drawing primitives the layout engine
//!   paints with
//! - `RecordingSurface`, which captures pages as a serializable
//!   `PaginatedDocument`
//! - the error type shared by every surface

mod error;
mod recording;
mod surface;

pub use error::RenderError;
pub use recording::{Page, PageElement, PaginatedDocument, RecordingSurface};
pub use surface::{PageSurface, TextAlign};
