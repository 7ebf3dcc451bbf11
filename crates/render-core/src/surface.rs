use crate::error::RenderError;
use preflight_style::StandardFont;
use preflight_types::{Color, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

/// A page-oriented drawing target.
///
/// Coordinates are PDF points with the origin in the lower-left corner of
/// the page. Text is positioned by its baseline. A surface holds at most
/// one open page; drawing without one fails with
/// [`RenderError::PageNotStarted`].
pub trait PageSurface {
    /// Advance width of `text` set in `font` at `size` points.
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32;

    /// Opens a new page. An open page is finished first.
    fn new_page(&mut self, size: Size) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: StandardFont,
        size: f32,
    ) -> Result<(), RenderError>;

    /// Draws `text` so that it ends at `right_x`.
    fn draw_right_aligned_text(
        &mut self,
        right_x: f32,
        y: f32,
        text: &str,
        font: StandardFont,
        size: f32,
    ) -> Result<(), RenderError> {
        let width = self.text_width(text, font, size);
        self.draw_text(right_x - width, y, text, font, size)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) -> Result<(), RenderError>;

    fn draw_line(&mut self, from: Point, to: Point, line_width: f32, color: Color) -> Result<(), RenderError>;

    fn finish_page(&mut self) -> Result<(), RenderError>;

    /// Completes the document. Must be called exactly once, after the last
    /// page.
    fn finalize(&mut self) -> Result<(), RenderError>;
}
