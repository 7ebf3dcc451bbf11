use preflight_model::{CenteredText, Checklist, ChecklistSection, SectionEntry, SectionItem};
use preflight_render_core::PageSurface;
use preflight_style::Configuration;
use preflight_types::{Color, Point, Rect};

use crate::LayoutError;
use crate::algorithms::pagination::{fits, section_extent, split_index};
use crate::enumeration::enumeration_label;
use crate::geometry::PageGeometry;
use crate::leader::{dot_count, dot_leader};

pub const SIMULATOR_DISCLAIMER: &str = "----- For Simulator Use Only -----";

/// Texts repeated on every page.
#[derive(Debug, Clone, Default)]
struct RunningTexts {
    aircraft_type: String,
    checklist_type: String,
    checklist_version: String,
    real_world_clearance: bool,
}

/// Draws a checklist onto a [`PageSurface`] one section at a time.
///
/// The engine tracks the current page, the vertical cursor (a baseline
/// that moves down the page) and the row shading parity. Deciding where a
/// section goes is up to the caller; see [`crate::driver::paginate`].
pub struct LayoutEngine<S: PageSurface> {
    surface: S,
    config: Configuration,
    geometry: PageGeometry,
    texts: RunningTexts,
    background_coloring: bool,
    page_number: u32,
    cursor: f32,
    left: f32,
    right: f32,
    shaded: bool,
}

impl<S: PageSurface> LayoutEngine<S> {
    pub fn new(surface: S, checklist: &Checklist) -> Self {
        let config = checklist.config.clone();
        let geometry = PageGeometry::from_config(&config);
        let (left, right) = geometry.content_span(1);
        Self {
            surface,
            texts: RunningTexts {
                aircraft_type: checklist.aircraft_type.clone(),
                checklist_type: checklist.checklist_type.clone(),
                checklist_version: checklist.checklist_version.clone(),
                real_world_clearance: checklist.real_world_clearance,
            },
            background_coloring: checklist.background_coloring,
            cursor: geometry.upper_start,
            geometry,
            config,
            page_number: 0,
            left,
            right,
            shaded: false,
        }
    }

    /// Number of the open page, 0 before the first page.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Finishes the open page, if any, and starts the next one with its
    /// header and footer.
    pub fn add_page(&mut self) -> Result<(), LayoutError> {
        if self.page_number > 0 {
            self.surface.finish_page()?;
        }
        self.page_number += 1;
        let (left, right) = self.geometry.content_span(self.page_number);
        self.left = left;
        self.right = right;
        self.surface.new_page(self.geometry.page_size)?;
        self.draw_header_and_footer()?;
        self.cursor = self.geometry.upper_start;
        log::debug!("Started page {}", self.page_number);
        Ok(())
    }

    /// Whether `section` fits between the cursor and the lower limit.
    pub fn section_fits_page(&self, section: &ChecklistSection) -> Result<bool, LayoutError> {
        reject_description(section)?;
        let extent = section_extent(section, &self.config);
        Ok(fits(self.cursor, extent, self.geometry.lower_limit))
    }

    /// Index of the first entry of `section` that would not fit from the cursor.
    pub fn split_index(&self, section: &ChecklistSection) -> usize {
        split_index(section, self.cursor, self.geometry.lower_limit, &self.config)
    }

    pub fn print_section(&mut self, section: &ChecklistSection) -> Result<(), LayoutError> {
        reject_description(section)?;
        self.shaded = false;
        self.surface.draw_text(
            self.left,
            self.cursor,
            &section.name,
            self.config.font_name_section_name,
            self.config.font_size_section_name,
        )?;
        self.cursor -= self.config.space_section_to_item;
        for entry in section.entries() {
            self.print_entry(entry, 0.0, 0)?;
        }
        self.shaded = false;
        log::debug!(
            "Printed section '{}' on page {}, cursor now at {:.2}",
            section.name,
            self.page_number,
            self.cursor
        );
        Ok(())
    }

    /// Replaces the gap after the last row with the gap between sections.
    pub fn finish_section(&mut self) {
        self.cursor += self.config.space_between_items;
        self.cursor -= self.config.space_between_sections;
    }

    /// Closes the open page, finalizes the surface and hands it back.
    pub fn finish(mut self) -> Result<S, LayoutError> {
        if self.page_number > 0 {
            self.surface.finish_page()?;
        }
        self.surface.finalize()?;
        log::debug!("Layout finished with {} pages", self.page_number);
        Ok(self.surface)
    }

    fn draw_header_and_footer(&mut self) -> Result<(), LayoutError> {
        let font = self.config.font_name_header_footer;
        let size = self.config.font_size_header_footer;
        let (header_y, footer_y) = (self.geometry.header_y, self.geometry.footer_y);

        if !self.texts.aircraft_type.is_empty() {
            self.surface
                .draw_text(self.left, header_y, &self.texts.aircraft_type, font, size)?;
        }
        if !self.texts.checklist_type.is_empty() {
            self.surface
                .draw_right_aligned_text(self.right, header_y, &self.texts.checklist_type, font, size)?;
        }
        let version = format!("Version {}", self.texts.checklist_version);
        self.surface.draw_text(self.left, footer_y, &version, font, size)?;
        if self.config.show_page_numbers {
            let page = format!("Page {}", self.page_number);
            self.surface
                .draw_right_aligned_text(self.right, footer_y, &page, font, size)?;
        }
        if !self.texts.real_world_clearance {
            let width = self.surface.text_width(SIMULATOR_DISCLAIMER, font, size);
            let x = self.centered_x(width);
            self.surface
                .draw_text(x, footer_y, SIMULATOR_DISCLAIMER, font, size)?;
        }
        Ok(())
    }

    /// Left edge of a run of `width` points centered between the margins,
    /// snapped to whole points.
    fn centered_x(&self, width: f32) -> f32 {
        ((self.right - self.left) / 2.0).floor() + self.left - (width / 2.0).floor()
    }

    fn row_height(&self) -> f32 {
        self.config.font_size_item + self.config.space_between_items / 3.0
    }

    fn row_bottom(&self) -> f32 {
        self.cursor - self.config.space_between_items / 4.0
    }

    fn print_entry(&mut self, entry: &SectionEntry, x_offset: f32, depth: usize) -> Result<(), LayoutError> {
        match entry {
            SectionEntry::CenteredText(heading) => self.print_centered_text(heading),
            SectionEntry::Item(item) => self.print_item(item, x_offset, depth),
        }
    }

    fn print_centered_text(&mut self, heading: &CenteredText) -> Result<(), LayoutError> {
        let font = self.config.item_font(heading.is_bold);
        let size = self.config.font_size_item;
        let width = self.surface.text_width(&heading.text, font, size);
        let x = self.centered_x(width);
        self.surface.draw_text(x, self.cursor, &heading.text, font, size)?;
        if self.background_coloring {
            self.draw_heading_frame(x, width)?;
        }
        self.cursor -= self.config.space_between_items;
        self.shaded = false;
        Ok(())
    }

    fn draw_heading_frame(&mut self, text_x: f32, text_width: f32) -> Result<(), LayoutError> {
        let offset = self.config.centered_text_rect_x_offset;
        let thickness = self.config.centered_text_line_thickness;
        let frame = Rect::new(
            text_x - offset,
            self.row_bottom(),
            text_width + 2.0 * offset,
            self.row_height(),
        );
        self.surface.stroke_rect(frame, thickness, Color::black())?;

        let rule_y = self.cursor + self.config.font_size_item / 2.0 + thickness / 2.0;
        self.surface.draw_line(
            Point::new(self.left, rule_y),
            Point::new(frame.x, rule_y),
            thickness,
            Color::black(),
        )?;
        self.surface.draw_line(
            Point::new(frame.right(), rule_y),
            Point::new(self.right, rule_y),
            thickness,
            Color::black(),
        )?;
        Ok(())
    }

    fn print_item(&mut self, item: &SectionItem, x_offset: f32, depth: usize) -> Result<(), LayoutError> {
        if self.background_coloring {
            if !self.shaded {
                let band = Rect::from_span(self.left, self.right, self.row_bottom(), self.row_height());
                self.surface.fill_rect(band, self.config.shading_color())?;
            }
            self.shaded = !self.shaded;
        }

        let regular = self.config.font_name_item;
        let size = self.config.font_size_item;
        let y = self.cursor;
        let mut x = self.left + x_offset;

        let label = enumeration_label(item.sequence_number(), depth);
        if !label.is_empty() {
            self.surface.draw_text(x, y, &label, regular, size)?;
        }
        x += self.config.space_for_enumerations;

        if let Some(left) = item.text_left() {
            let font = self.config.item_font(item.is_left_bold);
            self.surface.draw_text(x, y, left, font, size)?;
            x += self.surface.text_width(left, font, size);
        }

        let mut right_width = 0.0;
        if let Some(right) = item.text_right() {
            let font = self.config.item_font(item.is_right_bold);
            right_width = self.surface.text_width(right, font, size);
            self.surface.draw_right_aligned_text(self.right, y, right, font, size)?;
        }

        if let (Some(left), Some(right)) = (item.text_left(), item.text_right()) {
            let available = self.right - right_width - x;
            let dot_width = self.surface.text_width(".", regular, size);
            let count = dot_count(available, dot_width).ok_or_else(|| LayoutError::LeaderOverflow {
                text: format!("{}..{}", left, right),
                overflow: -available,
            })?;
            let leader = dot_leader(count, !left.is_empty(), !right.is_empty());
            if !leader.is_empty() {
                self.surface.draw_text(x, y, &leader, regular, size)?;
            }
        }

        self.cursor -= self.config.space_between_items;
        for subitem in item.subitems() {
            self.print_entry(subitem, x_offset + self.config.space_for_enumerations, depth + 1)?;
        }
        Ok(())
    }
}

fn reject_description(section: &ChecklistSection) -> Result<(), LayoutError> {
    if section.description.is_some() {
        return Err(LayoutError::Unsupported(format!(
            "section descriptions are not supported (section '{}')",
            section.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{checklist_with, checklist_with_config, init_logger, recording_engine, row, section_with_items};
    use preflight_render_core::{PageElement, RecordingSurface, TextAlign};
    use preflight_style::StandardFont;
    use preflight_traits::{FontMetrics, StandardFontMetrics};

    fn texts(elements: &[PageElement]) -> Vec<String> {
        elements
            .iter()
            .filter_map(|e| match e {
                PageElement::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn fills(elements: &[PageElement]) -> Vec<Rect> {
        elements
            .iter()
            .filter_map(|e| match e {
                PageElement::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    fn single_page(engine: LayoutEngine<RecordingSurface>) -> Vec<PageElement> {
        let document = engine.finish().unwrap().into_document();
        assert_eq!(document.page_count(), 1);
        document.pages[0].elements.clone()
    }

    #[test]
    fn test_header_and_footer() {
        init_logger();
        let checklist = checklist_with(vec![]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        assert_eq!(engine.page_number(), 1);
        assert_eq!(engine.cursor(), engine.geometry().upper_start);

        let elements = single_page(engine);
        assert_eq!(
            texts(&elements),
            vec!["C172", "Normal", "Version 1.0", "Page 1", SIMULATOR_DISCLAIMER]
        );
        match &elements[1] {
            PageElement::Text { x, align, .. } => {
                assert_eq!(*align, TextAlign::Right);
                assert!((x - 369.53).abs() < 1e-3);
            }
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_disclaimer_is_centered() {
        let checklist = checklist_with(vec![]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        let elements = single_page(engine);
        let width = StandardFontMetrics.text_width(SIMULATOR_DISCLAIMER, StandardFont::HelveticaBold, 8.0);
        let expected = ((369.53f32 - 80.0) / 2.0).floor() + 80.0 - (width / 2.0).floor();
        let x = elements
            .iter()
            .find_map(|e| match e {
                PageElement::Text { x, text, .. } if text == SIMULATOR_DISCLAIMER => Some(*x),
                _ => None,
            })
            .unwrap();
        assert_eq!(x, expected);
    }

    #[test]
    fn test_clearance_and_page_numbers_can_be_hidden() {
        let config = Configuration {
            show_page_numbers: false,
            ..Configuration::default()
        };
        let mut checklist = checklist_with_config(config, vec![]);
        checklist.real_world_clearance = true;
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        assert_eq!(texts(&single_page(engine)), vec!["C172", "Normal", "Version 1.0"]);
    }

    #[test]
    fn test_rows_are_enumerated_with_leaders() {
        let mut section = ChecklistSection::new("Before Start");
        section.append_entry(row("Battery", "ON"));
        section.append_entry(row("Avionics", "ON"));
        let checklist = checklist_with(vec![section]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        let start = engine.cursor();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        assert_eq!(engine.cursor(), start - 24.0 - 2.0 * 13.0);

        let elements = single_page(engine);
        let drawn = texts(&elements);
        let body = &drawn[5..];
        assert_eq!(body[0], "Before Start");
        assert_eq!(&body[1..3], &["1.".to_string(), "Battery".to_string()]);
        assert_eq!(body[3], "ON");
        assert!(body[4].starts_with(" .") && body[4].ends_with(". "));
        assert_eq!(&body[5..7], &["2.".to_string(), "Avionics".to_string()]);
    }

    #[test]
    fn test_leader_fills_the_gap() {
        let mut section = ChecklistSection::new("S");
        section.append_entry(row("Battery", "ON"));
        let checklist = checklist_with(vec![section]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        let elements = single_page(engine);

        let metrics = StandardFontMetrics;
        let left_x = 80.0 + 12.0 + metrics.text_width("Battery", StandardFont::Helvetica, 8.0);
        let right_w = metrics.text_width("ON", StandardFont::HelveticaBold, 8.0);
        let dot = metrics.text_width(".", StandardFont::Helvetica, 8.0);
        let expected = ((369.53f32 - right_w - left_x) / dot).floor() as usize;

        let leader = elements
            .iter()
            .find_map(|e| match e {
                PageElement::Text { x, text, .. } if text.ends_with(". ") => Some((*x, text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(leader.0, left_x);
        assert_eq!(leader.1.chars().count(), expected);
    }

    #[test]
    fn test_overlong_row_is_rejected() {
        let mut section = ChecklistSection::new("S");
        section.append_entry(row(&"W".repeat(40), &"M".repeat(20)));
        let checklist = checklist_with(vec![section]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        let err = engine.print_section(checklist.section(0).unwrap()).unwrap_err();
        match err {
            LayoutError::LeaderOverflow { overflow, .. } => assert!(overflow > 0.0),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_shading_alternates_and_resets_per_section() {
        let checklist = checklist_with(vec![
            section_with_items("A", &[2, 0]),
            section_with_items("B", &[0]),
        ]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        let first_row = engine.cursor() - 24.0;
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        engine.finish_section();
        let second_section_row = engine.cursor() - 24.0;
        engine.print_section(checklist.section(1).unwrap()).unwrap();

        let bands = fills(&single_page(engine));
        // rows: A1, a, b, A2 then B1; shading on A1, b and B1
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0].y, first_row - 13.0 / 4.0);
        assert_eq!(bands[1].y, first_row - 2.0 * 13.0 - 13.0 / 4.0);
        assert_eq!(bands[2].y, second_section_row - 13.0 / 4.0);
        assert_eq!(bands[0].x, 80.0);
        assert!((bands[0].right() - 369.53).abs() < 1e-3);
        assert_eq!(bands[0].height, 8.0 + 13.0 / 3.0);
    }

    #[test]
    fn test_no_shading_without_background_coloring() {
        let mut checklist = checklist_with(vec![section_with_items("A", &[0, 0, 0])]);
        checklist.background_coloring = false;
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        assert!(fills(&single_page(engine)).is_empty());
    }

    #[test]
    fn test_print_mode_uses_printing_gray_and_mirrors() {
        let config = Configuration {
            adaptive_layout: true,
            ..Configuration::default()
        };
        let checklist = checklist_with_config(config, vec![section_with_items("A", &[0])]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        engine.add_page().unwrap();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        let document = engine.finish().unwrap().into_document();
        assert_eq!(document.page_count(), 2);

        let page_two = &document.pages[1].elements;
        let band = page_two
            .iter()
            .find_map(|e| match e {
                PageElement::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(band.1, Color::gray(180));
        assert_eq!(band.0.x, 50.0);
        match &page_two[0] {
            PageElement::Text { x, text, .. } => {
                assert_eq!(text, "C172");
                assert_eq!(*x, 50.0);
            }
            other => panic!("unexpected element {:?}", other),
        }
    }

    #[test]
    fn test_centered_text_frame_and_shading_reset() {
        let mut section = ChecklistSection::new("Engine Failure");
        section.append_entry(row("Airspeed", "68 KIAS"));
        section.append_entry(CenteredText::new("IF NO RESTART", true));
        section.append_entry(row("Mixture", "CUTOFF"));
        let checklist = checklist_with(vec![section]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        let heading_y = engine.cursor() - 24.0 - 13.0;
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        let elements = single_page(engine);

        // the row after a heading is shaded again
        assert_eq!(fills(&elements).len(), 2);

        let frame = elements
            .iter()
            .find_map(|e| match e {
                PageElement::StrokeRect { rect, line_width, .. } => Some((*rect, *line_width)),
                _ => None,
            })
            .unwrap();
        assert_eq!(frame.1, 1.0);
        assert_eq!(frame.0.y, heading_y - 13.0 / 4.0);

        let rules: Vec<(Point, Point)> = elements
            .iter()
            .filter_map(|e| match e {
                PageElement::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].0.x, 80.0);
        assert_eq!(rules[0].1.x, frame.0.x);
        assert_eq!(rules[1].0.x, frame.0.right());
        assert_eq!(rules[0].0.y, heading_y + 4.0 + 0.5);
    }

    #[test]
    fn test_subitems_use_letters_and_indent() {
        let mut item = row("Flaps", "SET");
        item.append_subitem(row("Takeoff", "10"));
        item.append_subitem(SectionItem::bold_label("Note", true));
        item.append_subitem(row("Landing", "FULL"));
        let mut section = ChecklistSection::new("S");
        section.append_entry(item);
        let checklist = checklist_with(vec![section]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        let elements = single_page(engine);

        let labels: Vec<(f32, String)> = elements
            .iter()
            .filter_map(|e| match e {
                PageElement::Text { x, text, .. } if text.ends_with('.') && text.len() <= 3 => {
                    Some((*x, text.clone()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![(80.0, "1.".to_string()), (92.0, "a.".to_string()), (92.0, "b.".to_string())]
        );
    }

    #[test]
    fn test_descriptions_are_unsupported() {
        let section = ChecklistSection::new("S").with_description("details");
        let checklist = checklist_with(vec![]);
        let engine = recording_engine(&checklist);
        assert!(matches!(
            engine.section_fits_page(&section),
            Err(LayoutError::Unsupported(_))
        ));
    }

    #[test]
    fn test_finish_section_moves_to_section_gap() {
        let checklist = checklist_with(vec![section_with_items("A", &[0])]);
        let mut engine = recording_engine(&checklist);
        engine.add_page().unwrap();
        engine.print_section(checklist.section(0).unwrap()).unwrap();
        let after_rows = engine.cursor();
        engine.finish_section();
        assert_eq!(engine.cursor(), after_rows + 13.0 - 38.0);
    }
}
