pub mod font;

pub use font::{FontMetrics, StandardFontMetrics};
