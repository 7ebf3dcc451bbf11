//! The typed configuration schema of a checklist.
//!
//! Documents override options with `// key = value` directives. Each option
//! is declared once in [`OPTIONS`] with the kind of value it accepts; the
//! kind selects the parser, and [`Configuration::set`] dispatches the parsed
//! value onto the matching field.

use crate::dimension::{Margins, PageSize};
use crate::font::StandardFont;
use crate::parsers::{
    parse_flag, parse_gray_level, parse_length, parse_page_size, parse_standard_font, run_parser,
};
use preflight_types::{Color, Size};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown configuration option '{0}'")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for configuration option '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// The kind of value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A non-negative length in points, unit suffix optional.
    Length,
    /// A strictly positive length (font sizes).
    PositiveLength,
    Font,
    PageSize,
    /// A grey level between 0 (black) and 255 (white).
    GrayLevel,
    Flag,
}

/// One entry of the configuration schema.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub description: &'static str,
}

const fn opt(name: &'static str, kind: OptionKind, description: &'static str) -> OptionSpec {
    OptionSpec {
        name,
        kind,
        description,
    }
}

pub static OPTIONS: &[OptionSpec] = &[
    opt("border_left", OptionKind::Length, "Left page margin"),
    opt("border_right", OptionKind::Length, "Right page margin"),
    opt("border_top", OptionKind::Length, "Top page margin, header baseline"),
    opt("border_bottom", OptionKind::Length, "Bottom page margin, footer baseline"),
    opt("font_name_item", OptionKind::Font, "Font of regular row text"),
    opt("font_name_bold_item", OptionKind::Font, "Font of bold row text"),
    opt("font_size_item", OptionKind::PositiveLength, "Font size of rows"),
    opt("font_name_section_name", OptionKind::Font, "Font of section titles"),
    opt("font_size_section_name", OptionKind::PositiveLength, "Font size of section titles"),
    opt("font_name_header_footer", OptionKind::Font, "Font of header and footer"),
    opt("font_size_header_footer", OptionKind::PositiveLength, "Font size of header and footer"),
    opt("space_after_header", OptionKind::Length, "Gap between header and first section"),
    opt("space_between_sections", OptionKind::Length, "Gap between consecutive sections"),
    opt("space_section_to_item", OptionKind::Length, "Gap between a section title and its first row"),
    opt("space_between_items", OptionKind::Length, "Gap between consecutive rows"),
    opt("space_for_enumerations", OptionKind::Length, "Width reserved for enumeration labels"),
    opt("space_before_footer", OptionKind::Length, "Clearance kept above the footer"),
    opt("page_size", OptionKind::PageSize, "Page size name or <width>x<height>"),
    opt("centered_text_line_thickness", OptionKind::Length, "Stroke width of centered heading frames"),
    opt("centered_text_rect_x_offset", OptionKind::Length, "Horizontal padding inside centered heading frames"),
    opt("rect_background_color", OptionKind::GrayLevel, "Row shading grey"),
    opt("rect_background_color_printing", OptionKind::GrayLevel, "Row shading grey in print mode"),
    opt("background_coloring", OptionKind::Flag, "Shade alternating rows and frame centered headings"),
    opt("adaptive_layout", OptionKind::Flag, "Print mode: mirror margins on even pages for duplex binding"),
    opt("show_page_numbers", OptionKind::Flag, "Print the page number in the footer"),
];

/// A parsed option value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Length(f32),
    Font(StandardFont),
    PageSize(PageSize),
    Gray(u8),
    Flag(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Length(v) => write!(f, "{}", v),
            OptionValue::Font(font) => write!(f, "{}", font),
            OptionValue::PageSize(size) => write!(f, "{}", size),
            OptionValue::Gray(v) => write!(f, "{}", v),
            OptionValue::Flag(v) => write!(f, "{}", v),
        }
    }
}

impl OptionKind {
    /// Parses and validates a raw directive value for an option of this kind.
    pub fn parse(&self, key: &str, raw: &str) -> Result<OptionValue, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason,
        };
        match self {
            OptionKind::Length | OptionKind::PositiveLength => {
                let v = run_parser(parse_length, raw).map_err(|e| invalid(e.to_string()))?;
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid("length must not be negative".into()));
                }
                if *self == OptionKind::PositiveLength && v == 0.0 {
                    return Err(invalid("length must be greater than zero".into()));
                }
                Ok(OptionValue::Length(v))
            }
            OptionKind::Font => run_parser(parse_standard_font, raw)
                .map(OptionValue::Font)
                .map_err(|_| {
                    let known: Vec<&str> =
                        StandardFont::ALL.iter().map(|f| f.postscript_name()).collect();
                    invalid(format!("supported fonts are {}", known.join(", ")))
                }),
            OptionKind::PageSize => run_parser(parse_page_size, raw)
                .map(OptionValue::PageSize)
                .map_err(|_| {
                    let known: Vec<&str> = PageSize::NAMED.iter().filter_map(|p| p.name()).collect();
                    invalid(format!(
                        "supported page sizes are {} or <width>x<height>",
                        known.join(", ")
                    ))
                }),
            OptionKind::GrayLevel => run_parser(parse_gray_level, raw)
                .map(OptionValue::Gray)
                .map_err(|_| invalid("expected a grey level between 0 and 255".into())),
            OptionKind::Flag => run_parser(parse_flag, raw)
                .map(OptionValue::Flag)
                .map_err(|_| invalid("expected true or false".into())),
        }
    }
}

/// Typography, spacing and page setup of a checklist. Every field has a
/// default, so a document only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    // Border margins
    pub border_left: f32,
    pub border_right: f32,
    pub border_top: f32,
    pub border_bottom: f32,
    // Fonts and font sizes
    pub font_name_item: StandardFont,
    pub font_name_bold_item: StandardFont,
    pub font_size_item: f32,
    pub font_name_section_name: StandardFont,
    pub font_size_section_name: f32,
    pub font_name_header_footer: StandardFont,
    pub font_size_header_footer: f32,
    // Space between different elements
    pub space_after_header: f32,
    pub space_between_sections: f32,
    pub space_section_to_item: f32,
    pub space_between_items: f32,
    pub space_for_enumerations: f32,
    pub space_before_footer: f32,
    pub page_size: PageSize,
    // Centered text
    pub centered_text_line_thickness: f32,
    pub centered_text_rect_x_offset: f32,
    // Shading
    pub rect_background_color: u8,
    pub rect_background_color_printing: u8,
    pub background_coloring: bool,
    /// Print mode. Margins swap on even pages so the gutter faces the binding.
    pub adaptive_layout: bool,
    pub show_page_numbers: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            border_left: 80.0,
            border_right: 50.0,
            border_top: 40.0,
            border_bottom: 40.0,
            font_name_item: StandardFont::Helvetica,
            font_name_bold_item: StandardFont::HelveticaBold,
            font_size_item: 8.0,
            font_name_section_name: StandardFont::HelveticaBold,
            font_size_section_name: 11.0,
            font_name_header_footer: StandardFont::HelveticaBold,
            font_size_header_footer: 8.0,
            space_after_header: 40.0,
            space_between_sections: 38.0,
            space_section_to_item: 24.0,
            space_between_items: 13.0,
            space_for_enumerations: 12.0,
            space_before_footer: 20.0,
            page_size: PageSize::A5,
            centered_text_line_thickness: 1.0,
            centered_text_rect_x_offset: 5.0,
            rect_background_color: 211,
            rect_background_color_printing: 180,
            background_coloring: true,
            adaptive_layout: false,
            show_page_numbers: true,
        }
    }
}

impl Configuration {
    /// Looks up the schema entry of an option.
    pub fn spec(key: &str) -> Option<&'static OptionSpec> {
        OPTIONS.iter().find(|o| o.name == key)
    }

    /// Parses `raw` according to the option's schema entry and stores it.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let spec = Self::spec(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let parsed = spec.kind.parse(key, raw)?;
        self.assign(spec.name, parsed);
        Ok(())
    }

    /// Applies a batch of directives. Unknown keys are collected and
    /// returned; an invalid value aborts with an error.
    pub fn apply<'a, I>(&mut self, entries: I) -> Result<Vec<String>, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut unknown = Vec::new();
        for (key, raw) in entries {
            match self.set(key, raw) {
                Ok(()) => log::trace!("Configuration option '{}' set to '{}'", key, raw),
                Err(ConfigError::UnknownKey(k)) => unknown.push(k),
                Err(e) => return Err(e),
            }
        }
        Ok(unknown)
    }

    fn assign(&mut self, name: &str, value: OptionValue) {
        match (name, value) {
            ("border_left", OptionValue::Length(v)) => self.border_left = v,
            ("border_right", OptionValue::Length(v)) => self.border_right = v,
            ("border_top", OptionValue::Length(v)) => self.border_top = v,
            ("border_bottom", OptionValue::Length(v)) => self.border_bottom = v,
            ("font_name_item", OptionValue::Font(f)) => self.font_name_item = f,
            ("font_name_bold_item", OptionValue::Font(f)) => self.font_name_bold_item = f,
            ("font_size_item", OptionValue::Length(v)) => self.font_size_item = v,
            ("font_name_section_name", OptionValue::Font(f)) => self.font_name_section_name = f,
            ("font_size_section_name", OptionValue::Length(v)) => self.font_size_section_name = v,
            ("font_name_header_footer", OptionValue::Font(f)) => self.font_name_header_footer = f,
            ("font_size_header_footer", OptionValue::Length(v)) => self.font_size_header_footer = v,
            ("space_after_header", OptionValue::Length(v)) => self.space_after_header = v,
            ("space_between_sections", OptionValue::Length(v)) => self.space_between_sections = v,
            ("space_section_to_item", OptionValue::Length(v)) => self.space_section_to_item = v,
            ("space_between_items", OptionValue::Length(v)) => self.space_between_items = v,
            ("space_for_enumerations", OptionValue::Length(v)) => self.space_for_enumerations = v,
            ("space_before_footer", OptionValue::Length(v)) => self.space_before_footer = v,
            ("page_size", OptionValue::PageSize(p)) => self.page_size = p,
            ("centered_text_line_thickness", OptionValue::Length(v)) => {
                self.centered_text_line_thickness = v
            }
            ("centered_text_rect_x_offset", OptionValue::Length(v)) => {
                self.centered_text_rect_x_offset = v
            }
            ("rect_background_color", OptionValue::Gray(v)) => self.rect_background_color = v,
            ("rect_background_color_printing", OptionValue::Gray(v)) => {
                self.rect_background_color_printing = v
            }
            ("background_coloring", OptionValue::Flag(v)) => self.background_coloring = v,
            ("adaptive_layout", OptionValue::Flag(v)) => self.adaptive_layout = v,
            ("show_page_numbers", OptionValue::Flag(v)) => self.show_page_numbers = v,
            (name, value) => {
                log::error!("Schema mismatch: option '{}' cannot hold {:?}", name, value)
            }
        }
    }

    /// Returns the current value of an option, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<OptionValue> {
        let value = match key {
            "border_left" => OptionValue::Length(self.border_left),
            "border_right" => OptionValue::Length(self.border_right),
            "border_top" => OptionValue::Length(self.border_top),
            "border_bottom" => OptionValue::Length(self.border_bottom),
            "font_name_item" => OptionValue::Font(self.font_name_item),
            "font_name_bold_item" => OptionValue::Font(self.font_name_bold_item),
            "font_size_item" => OptionValue::Length(self.font_size_item),
            "font_name_section_name" => OptionValue::Font(self.font_name_section_name),
            "font_size_section_name" => OptionValue::Length(self.font_size_section_name),
            "font_name_header_footer" => OptionValue::Font(self.font_name_header_footer),
            "font_size_header_footer" => OptionValue::Length(self.font_size_header_footer),
            "space_after_header" => OptionValue::Length(self.space_after_header),
            "space_between_sections" => OptionValue::Length(self.space_between_sections),
            "space_section_to_item" => OptionValue::Length(self.space_section_to_item),
            "space_between_items" => OptionValue::Length(self.space_between_items),
            "space_for_enumerations" => OptionValue::Length(self.space_for_enumerations),
            "space_before_footer" => OptionValue::Length(self.space_before_footer),
            "page_size" => OptionValue::PageSize(self.page_size),
            "centered_text_line_thickness" => OptionValue::Length(self.centered_text_line_thickness),
            "centered_text_rect_x_offset" => OptionValue::Length(self.centered_text_rect_x_offset),
            "rect_background_color" => OptionValue::Gray(self.rect_background_color),
            "rect_background_color_printing" => {
                OptionValue::Gray(self.rect_background_color_printing)
            }
            "background_coloring" => OptionValue::Flag(self.background_coloring),
            "adaptive_layout" => OptionValue::Flag(self.adaptive_layout),
            "show_page_numbers" => OptionValue::Flag(self.show_page_numbers),
            _ => return None,
        };
        Some(value)
    }

    /// Options whose value differs from the default, in schema order.
    pub fn non_default_entries(&self) -> Vec<(&'static str, OptionValue)> {
        let defaults = Configuration::default();
        OPTIONS
            .iter()
            .filter_map(|spec| {
                let current = self.get(spec.name)?;
                (defaults.get(spec.name) != Some(current)).then_some((spec.name, current))
            })
            .collect()
    }

    pub fn page_dimensions(&self) -> Size {
        self.page_size.size()
    }

    pub fn margins(&self) -> Margins {
        Margins {
            top: self.border_top,
            right: self.border_right,
            bottom: self.border_bottom,
            left: self.border_left,
        }
    }

    /// The row shading colour for the current mode.
    pub fn shading_color(&self) -> Color {
        if self.adaptive_layout {
            Color::gray(self.rect_background_color_printing)
        } else {
            Color::gray(self.rect_background_color)
        }
    }

    /// Font used for row text with the given boldness.
    pub fn item_font(&self, bold: bool) -> StandardFont {
        if bold {
            self.font_name_bold_item
        } else {
            self.font_name_item
        }
    }
}
