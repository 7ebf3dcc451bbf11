use crate::error::RenderError;
use crate::surface::{PageSurface, TextAlign};
use preflight_style::StandardFont;
use preflight_traits::{FontMetrics, StandardFontMetrics};
use preflight_types::{Color, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A positioned drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageElement {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: StandardFont,
        size: f32,
        align: TextAlign,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        line_width: f32,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        line_width: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub elements: Vec<PageElement>,
}

impl Page {
    /// Text runs on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            PageElement::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// The finished page description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    pub page_size: Size,
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Draws every recorded page onto another surface. The target is not
    /// finalized.
    pub fn replay<S: PageSurface + ?Sized>(&self, surface: &mut S) -> Result<(), RenderError> {
        for page in &self.pages {
            surface.new_page(self.page_size)?;
            for element in &page.elements {
                match element {
                    PageElement::Text {
                        x,
                        y,
                        text,
                        font,
                        size,
                        align: TextAlign::Left,
                    } => surface.draw_text(*x, *y, text, *font, *size)?,
                    PageElement::Text {
                        x,
                        y,
                        text,
                        font,
                        size,
                        align: TextAlign::Right,
                    } => surface.draw_right_aligned_text(*x, *y, text, *font, *size)?,
                    PageElement::FillRect { rect, color } => surface.fill_rect(*rect, *color)?,
                    PageElement::StrokeRect {
                        rect,
                        line_width,
                        color,
                    } => surface.stroke_rect(*rect, *line_width, *color)?,
                    PageElement::Line {
                        from,
                        to,
                        line_width,
                        color,
                    } => surface.draw_line(*from, *to, *line_width, *color)?,
                }
            }
            surface.finish_page()?;
        }
        Ok(())
    }
}

/// A surface that keeps every drawing instruction in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface<M = StandardFontMetrics> {
    metrics: M,
    document: PaginatedDocument,
    current: Option<Page>,
    finalized: bool,
}

impl RecordingSurface<StandardFontMetrics> {
    pub fn new() -> Self {
        Self::with_metrics(StandardFontMetrics::new())
    }
}

impl<M: FontMetrics> RecordingSurface<M> {
    pub fn with_metrics(metrics: M) -> Self {
        Self {
            metrics,
            document: PaginatedDocument::default(),
            current: None,
            finalized: false,
        }
    }

    pub fn document(&self) -> &PaginatedDocument {
        &self.document
    }

    pub fn into_document(self) -> PaginatedDocument {
        self.document
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn push(&mut self, element: PageElement) -> Result<(), RenderError> {
        if self.finalized {
            return Err(RenderError::AlreadyFinalized);
        }
        let page = self.current.as_mut().ok_or(RenderError::PageNotStarted)?;
        page.elements.push(element);
        Ok(())
    }
}

impl<M: FontMetrics> PageSurface for RecordingSurface<M> {
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32 {
        self.metrics.text_width(text, font, size)
    }

    fn new_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.finalized {
            return Err(RenderError::AlreadyFinalized);
        }
        if self.current.is_some() {
            self.finish_page()?;
        }
        self.document.page_size = size;
        self.current = Some(Page::default());
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32) -> Result<(), RenderError> {
        self.push(PageElement::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
            align: TextAlign::Left,
        })
    }

    fn draw_right_aligned_text(
        &mut self,
        right_x: f32,
        y: f32,
        text: &str,
        font: StandardFont,
        size: f32,
    ) -> Result<(), RenderError> {
        self.push(PageElement::Text {
            x: right_x,
            y,
            text: text.to_string(),
            font,
            size,
            align: TextAlign::Right,
        })
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.push(PageElement::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) -> Result<(), RenderError> {
        self.push(PageElement::StrokeRect {
            rect,
            line_width,
            color,
        })
    }

    fn draw_line(&mut self, from: Point, to: Point, line_width: f32, color: Color) -> Result<(), RenderError> {
        self.push(PageElement::Line {
            from,
            to,
            line_width,
            color,
        })
    }

    fn finish_page(&mut self) -> Result<(), RenderError> {
        if self.finalized {
            return Err(RenderError::AlreadyFinalized);
        }
        let page = self.current.take().ok_or(RenderError::PageNotStarted)?;
        self.document.pages.push(page);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        if self.finalized {
            return Err(RenderError::AlreadyFinalized);
        }
        if self.current.is_some() {
            self.finish_page()?;
        }
        self.finalized = true;
        log::debug!("Recorded {} pages", self.document.page_count());
        Ok(())
    }
}
