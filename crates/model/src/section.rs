use crate::item::SectionEntry;

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistSection {
    pub name: String,
    pub description: Option<String>,
    /// Number of entries carried by earlier parts when this section
    /// continues a split one.
    pub numbering_offset: u32,
    sequence_number: Option<u32>,
    entries: Vec<SectionEntry>,
    items_sequence_head: u32,
}

impl ChecklistSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            numbering_offset: 0,
            sequence_number: None,
            entries: Vec::new(),
            items_sequence_head: 1,
        }
    }

    /// Builds a section around entries that already carry their numbers,
    /// as happens for the tail of a split section.
    pub fn from_entries(name: impl Into<String>, entries: Vec<SectionEntry>, numbering_offset: u32) -> Self {
        let next = entries
            .iter()
            .filter_map(|e| e.as_item().and_then(|i| i.sequence_number()))
            .max()
            .map_or(1, |n| n + 1);
        Self {
            name: name.into(),
            description: None,
            numbering_offset,
            sequence_number: None,
            entries,
            items_sequence_head: next,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sequence_number(&self) -> Option<u32> {
        self.sequence_number
    }

    pub(crate) fn set_sequence_number(&mut self, number: u32) {
        self.sequence_number = Some(number);
    }

    /// Appends a row, numbering items that take part in enumeration.
    pub fn append_entry(&mut self, entry: impl Into<SectionEntry>) {
        let mut entry = entry.into();
        if let SectionEntry::Item(item) = &mut entry {
            item.assign_sequence_number(&mut self.items_sequence_head);
        }
        self.entries.push(entry);
    }

    /// Moves every entry from `at` onward out of the section. Retained
    /// entries keep their numbers.
    pub fn split_off(&mut self, at: usize) -> Vec<SectionEntry> {
        let at = at.min(self.entries.len());
        self.entries.split_off(at)
    }
}
