use preflight_style::Configuration;

use crate::section::ChecklistSection;

/// Root of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    pub aircraft_type: String,
    pub checklist_type: String,
    pub checklist_version: String,
    pub real_world_clearance: bool,
    pub background_coloring: bool,
    pub config: Configuration,
    sections: Vec<ChecklistSection>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl Checklist {
    pub fn new(config: Configuration) -> Self {
        Self {
            aircraft_type: String::new(),
            checklist_type: String::new(),
            checklist_version: String::new(),
            real_world_clearance: false,
            background_coloring: config.background_coloring,
            config,
            sections: Vec::new(),
        }
    }

    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&ChecklistSection> {
        self.sections.get(index)
    }

    /// Mutable access to a section's rows. The section list itself only
    /// changes through [`Checklist::append_section`] and
    /// [`Checklist::insert_section`] so numbering stays contiguous.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut ChecklistSection> {
        self.sections.get_mut(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn append_section(&mut self, mut section: ChecklistSection) {
        section.set_sequence_number(self.sections.len() as u32 + 1);
        self.sections.push(section);
    }

    /// Inserts a section at `index` (clamped to the end) and renumbers all
    /// sections from 1.
    pub fn insert_section(&mut self, index: usize, section: ChecklistSection) {
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
        for (number, section) in self.sections.iter_mut().enumerate() {
            section.set_sequence_number(number as u32 + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(checklist: &Checklist) -> Vec<Option<u32>> {
        checklist.sections().iter().map(|s| s.sequence_number()).collect()
    }

    #[test]
    fn test_append_numbers_sections_from_one() {
        let mut checklist = Checklist::default();
        checklist.append_section(ChecklistSection::new("Before Start"));
        checklist.append_section(ChecklistSection::new("Start"));
        assert_eq!(numbers(&checklist), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_insert_renumbers_every_section() {
        let mut checklist = Checklist::default();
        checklist.append_section(ChecklistSection::new("Before Start"));
        checklist.append_section(ChecklistSection::new("Start"));
        checklist.insert_section(1, ChecklistSection::new("Before Start - CONTINUED"));
        assert_eq!(numbers(&checklist), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(checklist.section(1).unwrap().name, "Before Start - CONTINUED");
        assert_eq!(checklist.section(2).unwrap().name, "Start");
    }

    #[test]
    fn test_background_coloring_follows_configuration() {
        let mut config = Configuration::default();
        config.background_coloring = false;
        assert!(!Checklist::new(config).background_coloring);
        assert!(Checklist::default().background_coloring);
    }
}
