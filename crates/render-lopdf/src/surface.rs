use crate::content::PageContent;
use crate::writer::PdfWriter;
use preflight_render_core::{PageSurface, RenderError};
use preflight_style::StandardFont;
use preflight_traits::{FontMetrics, StandardFontMetrics};
use preflight_types::{Color, Point, Rect, Size};
use std::io::Write;

/// A [`PageSurface`] producing a PDF into `W`.
///
/// Pages are handed to the [`PdfWriter`] as they are finished; the bytes
/// reach `W` only when [`PageSurface::finalize`] succeeds.
pub struct LopdfSurface<W: Write, M: FontMetrics = StandardFontMetrics> {
    writer: Option<PdfWriter>,
    output: W,
    metrics: M,
    page: Option<(Size, PageContent)>,
}

impl<W: Write> LopdfSurface<W, StandardFontMetrics> {
    pub fn new(output: W) -> Self {
        Self::with_metrics(output, StandardFontMetrics::new())
    }
}

impl<W: Write, M: FontMetrics> LopdfSurface<W, M> {
    pub fn with_metrics(output: W, metrics: M) -> Self {
        Self {
            writer: Some(PdfWriter::new()),
            output,
            metrics,
            page: None,
        }
    }

    /// Sets the document title stored in the info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        if let Some(writer) = self.writer.as_mut() {
            writer.set_title(title);
        }
        self
    }

    pub fn is_finalized(&self) -> bool {
        self.writer.is_none()
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn content(&mut self) -> Result<&mut PageContent, RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::AlreadyFinalized);
        }
        self.page
            .as_mut()
            .map(|(_, content)| content)
            .ok_or(RenderError::PageNotStarted)
    }
}

impl<W: Write, M: FontMetrics> PageSurface for LopdfSurface<W, M> {
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32 {
        self.metrics.text_width(text, font, size)
    }

    fn new_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::AlreadyFinalized);
        }
        if self.page.is_some() {
            self.finish_page()?;
        }
        self.page = Some((size, PageContent::new()));
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32) -> Result<(), RenderError> {
        self.content()?.text(x, y, text, font, size);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.content()?.fill_rect(rect, color);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) -> Result<(), RenderError> {
        self.content()?.stroke_rect(rect, line_width, color);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, line_width: f32, color: Color) -> Result<(), RenderError> {
        self.content()?.line(from, to, line_width, color);
        Ok(())
    }

    fn finish_page(&mut self) -> Result<(), RenderError> {
        let writer = self.writer.as_mut().ok_or(RenderError::AlreadyFinalized)?;
        let (size, content) = self.page.take().ok_or(RenderError::PageNotStarted)?;
        writer.add_page(size, content)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        if self.page.is_some() {
            self.finish_page()?;
        }
        let writer = self.writer.take().ok_or(RenderError::AlreadyFinalized)?;
        writer.finish(&mut self.output)
    }
}
