use crate::ModelError;

/// A standalone heading drawn centered inside a frame. Never enumerated.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredText {
    pub text: String,
    pub is_bold: bool,
}

impl CenteredText {
    pub fn new(text: impl Into<String>, is_bold: bool) -> Self {
        Self {
            text: text.into(),
            is_bold,
        }
    }
}

/// One row of a section or of a parent item.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionEntry {
    Item(SectionItem),
    CenteredText(CenteredText),
}

impl SectionEntry {
    /// Number of rows nested below this entry at any depth.
    pub fn subitem_count(&self) -> usize {
        match self {
            SectionEntry::Item(item) => item
                .subitems
                .iter()
                .map(|sub| 1 + sub.subitem_count())
                .sum(),
            SectionEntry::CenteredText(_) => 0,
        }
    }

    pub fn as_item(&self) -> Option<&SectionItem> {
        match self {
            SectionEntry::Item(item) => Some(item),
            SectionEntry::CenteredText(_) => None,
        }
    }
}

impl From<SectionItem> for SectionEntry {
    fn from(item: SectionItem) -> Self {
        SectionEntry::Item(item)
    }
}

impl From<CenteredText> for SectionEntry {
    fn from(text: CenteredText) -> Self {
        SectionEntry::CenteredText(text)
    }
}

/// A checklist row: left text, right text, or both joined by a dot leader.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionItem {
    text_left: Option<String>,
    text_right: Option<String>,
    pub is_left_bold: bool,
    pub is_right_bold: bool,
    ignore_in_sequence: bool,
    sequence_number: Option<u32>,
    subitems: Vec<SectionEntry>,
    subitems_sequence_head: u32,
}

impl SectionItem {
    /// Creates a regular row (left regular, right bold, enumerated).
    pub fn new(text_left: Option<String>, text_right: Option<String>) -> Result<Self, ModelError> {
        if text_left.is_none() && text_right.is_none() {
            return Err(ModelError::EmptyItem);
        }
        Ok(Self {
            text_left,
            text_right,
            is_left_bold: false,
            is_right_bold: true,
            ignore_in_sequence: false,
            sequence_number: None,
            subitems: Vec::new(),
            subitems_sequence_head: 1,
        })
    }

    /// Creates a left-only bold row.
    pub fn bold_label(text: impl Into<String>, ignore_in_sequence: bool) -> Self {
        Self {
            text_left: Some(text.into()),
            text_right: None,
            is_left_bold: true,
            is_right_bold: false,
            ignore_in_sequence,
            sequence_number: None,
            subitems: Vec::new(),
            subitems_sequence_head: 1,
        }
    }

    pub fn excluded_from_sequence(mut self, ignore: bool) -> Self {
        self.ignore_in_sequence = ignore;
        self
    }

    pub fn text_left(&self) -> Option<&str> {
        self.text_left.as_deref()
    }

    pub fn text_right(&self) -> Option<&str> {
        self.text_right.as_deref()
    }

    pub fn ignore_in_sequence(&self) -> bool {
        self.ignore_in_sequence
    }

    /// Position among enumerated siblings, starting at 1. `None` when the
    /// item is excluded from enumeration or not attached to a parent yet.
    pub fn sequence_number(&self) -> Option<u32> {
        self.sequence_number
    }

    pub fn subitems(&self) -> &[SectionEntry] {
        &self.subitems
    }

    /// Appends a child row, numbering it when it takes part in enumeration.
    pub fn append_subitem(&mut self, subitem: impl Into<SectionEntry>) {
        let mut subitem = subitem.into();
        if let SectionEntry::Item(item) = &mut subitem {
            item.sequence_number = None;
            if !item.ignore_in_sequence {
                item.sequence_number = Some(self.subitems_sequence_head);
                self.subitems_sequence_head += 1;
            }
        }
        self.subitems.push(subitem);
    }

    pub(crate) fn assign_sequence_number(&mut self, head: &mut u32) {
        self.sequence_number = None;
        if !self.ignore_in_sequence {
            self.sequence_number = Some(*head);
            *head += 1;
        }
    }
}
