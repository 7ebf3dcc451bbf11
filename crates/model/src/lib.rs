//! The checklist document tree.
//!
//! A [`Checklist`] owns its [`ChecklistSection`]s, a section owns its
//! [`SectionEntry`]s and an item owns its subitems. There are no back
//! references; traversals match on the entry kind.

mod checklist;
mod item;
mod section;

pub use checklist::Checklist;
pub use item::{CenteredText, SectionEntry, SectionItem};
pub use section::ChecklistSection;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("An item needs a left text, a right text or both")]
    EmptyItem,
}
