use preflight_model::{CenteredText, Checklist, ChecklistSection, SectionItem};
use preflight_style::Configuration;

use crate::error::ParseError;
use crate::line::{Line, classify};
use crate::{AIRCRAFT_TYPE_KEY, CHECKLIST_TYPE_KEY, CHECKLIST_VERSION_KEY, REAL_WORLD_CLEARANCE_KEY};

/// A parsed checklist together with the directive keys nobody claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub checklist: Checklist,
    pub unknown_keys: Vec<String>,
}

pub fn parse_checklist(input: &str) -> Result<ParseOutcome, ParseError> {
    parse_lines(input.lines())
}

/// Parses markup line by line. Line numbers in errors are 1-based.
pub fn parse_lines<I, S>(lines: I) -> Result<ParseOutcome, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParserState::default();
    for (index, line) in lines.into_iter().enumerate() {
        state.feed(index + 1, line.as_ref())?;
    }
    state.finish()
}

#[derive(Default)]
struct ParserState {
    sections: Vec<ChecklistSection>,
    section: Option<ChecklistSection>,
    item: Option<SectionItem>,
    directives: Vec<(String, String)>,
}

impl ParserState {
    fn feed(&mut self, number: usize, text: &str) -> Result<(), ParseError> {
        match classify(text) {
            Line::Ignored => {}
            Line::BadDirective(body) => {
                log::warn!("Line {}: ignoring directive without '=': '{}'", number, body)
            }
            Line::Directive { key, value } => {
                self.directives.push((key.to_string(), value.to_string()));
            }
            Line::Section(name) => {
                self.close_section();
                self.section = Some(ChecklistSection::new(name));
            }
            Line::Item { left, right } => {
                if self.section.is_none() {
                    return Err(self.malformed(number, "item defined before the first section"));
                }
                self.close_item();
                self.item = Some(self.row(number, left, right)?);
            }
            Line::SubItem { left, right } => {
                let row = self.row(number, left, right)?;
                self.open_item(number)?.append_subitem(row);
            }
            Line::BoldSubItem { text, enumerated } => {
                if text.is_empty() {
                    return Err(self.malformed(number, "bold subitem without text"));
                }
                let row = SectionItem::bold_label(text, !enumerated);
                self.open_item(number)?.append_subitem(row);
            }
            Line::Centered(text) => {
                let heading = CenteredText::new(text, true);
                if let Some(item) = self.item.as_mut() {
                    item.append_subitem(heading);
                } else if let Some(section) = self.section.as_mut() {
                    section.append_entry(heading);
                } else {
                    return Err(self.malformed(number, "centered text defined before the first section"));
                }
            }
        }
        Ok(())
    }

    fn row(&self, number: usize, left: Option<&str>, right: Option<&str>) -> Result<SectionItem, ParseError> {
        SectionItem::new(left.map(str::to_string), right.map(str::to_string))
            .map_err(|e| self.malformed(number, e.to_string()))
    }

    fn open_item(&mut self, number: usize) -> Result<&mut SectionItem, ParseError> {
        self.item.as_mut().ok_or_else(|| ParseError::Malformed {
            line: number,
            section: self.section.as_ref().map(|s| s.name.clone()),
            message: "subitem defined before the first item of the section".into(),
        })
    }

    fn malformed(&self, line: usize, message: impl Into<String>) -> ParseError {
        ParseError::Malformed {
            line,
            section: self.section.as_ref().map(|s| s.name.clone()),
            message: message.into(),
        }
    }

    fn close_item(&mut self) {
        if let Some(item) = self.item.take() {
            if let Some(section) = self.section.as_mut() {
                section.append_entry(item);
            }
        }
    }

    fn close_section(&mut self) {
        self.close_item();
        if let Some(section) = self.section.take() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Result<ParseOutcome, ParseError> {
        self.close_section();

        let mut aircraft_type = String::new();
        let mut checklist_type = String::new();
        let mut checklist_version = String::new();
        let mut real_world_clearance = false;
        let mut options = Vec::new();
        for (key, value) in self.directives {
            match key.as_str() {
                AIRCRAFT_TYPE_KEY => aircraft_type = value,
                CHECKLIST_TYPE_KEY => checklist_type = value,
                CHECKLIST_VERSION_KEY => checklist_version = value,
                REAL_WORLD_CLEARANCE_KEY => real_world_clearance = !value.eq_ignore_ascii_case("false"),
                _ => options.push((key, value)),
            }
        }

        let mut config = Configuration::default();
        let unknown_keys = config.apply(options.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        if !unknown_keys.is_empty() {
            log::warn!("Ignoring unknown configuration options: {}", unknown_keys.join(", "));
        }

        let mut checklist = Checklist::new(config);
        checklist.aircraft_type = aircraft_type;
        checklist.checklist_type = checklist_type;
        checklist.checklist_version = checklist_version;
        checklist.real_world_clearance = real_world_clearance;
        for section in self.sections {
            checklist.append_section(section);
        }
        log::debug!(
            "Parsed checklist '{} {}' with {} sections",
            checklist.aircraft_type,
            checklist.checklist_type,
            checklist.section_count()
        );
        Ok(ParseOutcome {
            checklist,
            unknown_keys,
        })
    }
}
