//! PDF output using lopdf.
//!
//! [`LopdfSurface`] implements `PageSurface` by collecting content
//! operations per page and handing finished pages to a [`PdfWriter`],
//! which serializes the whole document once the surface is finalized.
//! Text is set in the PDF standard Type1 fonts, so nothing is embedded.

mod content;
mod surface;
mod writer;

pub use content::{PageContent, font_resource_name, to_win_ansi};
pub use surface::LopdfSurface;
pub use writer::PdfWriter;
