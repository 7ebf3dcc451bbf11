use preflight_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
    #[error(
        "Section '{section}' needs {needed:.2}pt for its first row, but a page only offers {available:.2}pt."
    )]
    ElementTooLarge {
        section: String,
        needed: f32,
        available: f32,
    },
    #[error("Row '{text}' is {overflow:.2}pt too wide for the content area.")]
    LeaderOverflow { text: String, overflow: f32 },
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub mod algorithms;
pub mod driver;
pub mod engine;
pub mod enumeration;
pub mod geometry;
pub mod leader;

pub use self::driver::paginate;
pub use self::engine::LayoutEngine;
pub use self::geometry::PageGeometry;

#[cfg(test)]
mod test_utils;
