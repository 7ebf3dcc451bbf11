use preflight_style::{Configuration, Margins};
use preflight_types::Size;

/// Fixed page coordinates derived once from a configuration.
///
/// All values are PDF points measured from the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_size: Size,
    /// Baseline of the header line.
    pub header_y: f32,
    /// Baseline of the footer line.
    pub footer_y: f32,
    /// Rows must stay strictly above this line.
    pub lower_limit: f32,
    /// Baseline of the first section title on a page.
    pub upper_start: f32,
    margins: Margins,
    mirrored: bool,
}

impl PageGeometry {
    pub fn from_config(config: &Configuration) -> Self {
        let page_size = config.page_dimensions();
        Self {
            page_size,
            header_y: page_size.height - config.border_top,
            footer_y: config.border_bottom,
            lower_limit: config.border_bottom + config.font_size_header_footer + config.space_before_footer,
            upper_start: page_size.height - config.border_top - config.space_after_header,
            margins: config.margins(),
            mirrored: config.adaptive_layout,
        }
    }

    /// Vertical room between the top of the content area and the lower limit.
    pub fn content_height(&self) -> f32 {
        self.upper_start - self.lower_limit
    }

    /// Left and right content edges of a page. With a mirrored layout the
    /// side margins swap on even pages.
    pub fn content_span(&self, page_number: u32) -> (f32, f32) {
        let margins = if self.mirrored && page_number % 2 == 0 {
            self.margins.mirrored()
        } else {
            self.margins
        };
        (margins.left, self.page_size.width - margins.right)
    }
}
