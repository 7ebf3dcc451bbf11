//! Page-fit estimates and section splitting.
//!
//! Costs are measured from the baseline of a section title: the first row
//! sits `space_section_to_item` below it, every further row
//! `space_between_items` below the previous one, and every nested row adds
//! another `space_between_items`.

use preflight_model::{Checklist, ChecklistSection, SectionEntry};
use preflight_style::Configuration;

pub const CONTINUATION_SUFFIX: &str = " - CONTINUED";

/// Vertical cost of one top-level entry at position `index`.
pub fn entry_cost(index: usize, entry: &SectionEntry, config: &Configuration) -> f32 {
    let spacing = if index == 0 {
        config.space_section_to_item
    } else {
        config.space_between_items
    };
    spacing + config.space_between_items * entry.subitem_count() as f32
}

/// Running cost after each entry, shared by the fit test and the split search.
fn cumulative_costs<'a>(
    section: &'a ChecklistSection,
    config: &'a Configuration,
) -> impl Iterator<Item = f32> + 'a {
    section
        .entries()
        .iter()
        .enumerate()
        .scan(0.0f32, move |cumulative, (index, entry)| {
            *cumulative += entry_cost(index, entry, config);
            Some(*cumulative)
        })
}

/// Distance from the section title baseline to the baseline of its last row.
pub fn section_extent(section: &ChecklistSection, config: &Configuration) -> f32 {
    cumulative_costs(section, config).last().unwrap_or(0.0)
}

/// True when a block of height `extent` starting at `cursor` stays above `lower_limit`.
pub fn fits(cursor: f32, extent: f32, lower_limit: f32) -> bool {
    cursor - extent > lower_limit
}

/// Index of the first entry that would reach the lower limit, or the entry
/// count when the whole section fits.
pub fn split_index(section: &ChecklistSection, cursor: f32, lower_limit: f32, config: &Configuration) -> usize {
    match cumulative_costs(section, config).position(|cost| !fits(cursor, cost, lower_limit)) {
        Some(index) => {
            log::trace!(
                "Section '{}' reaches the lower limit at entry {} (from {:.2})",
                section.name,
                index,
                cursor
            );
            index
        }
        None => section.len(),
    }
}

/// Name of the section continuing `name` on a later page.
pub fn continuation_name(name: &str) -> String {
    if name.ends_with(CONTINUATION_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, CONTINUATION_SUFFIX)
    }
}

/// Moves the entries of section `index` from `at` onward into a
/// continuation section inserted right after it. Returns whether a
/// continuation was created.
pub fn split_section(checklist: &mut Checklist, index: usize, at: usize) -> bool {
    let Some(section) = checklist.section_mut(index) else {
        return false;
    };
    if at >= section.len() {
        return false;
    }
    let tail = section.split_off(at);
    let name = continuation_name(&section.name);
    let numbering_offset = at as u32 + section.numbering_offset;
    log::debug!(
        "Splitting section '{}' after {} entries, {} move to '{}'",
        section.name,
        at,
        tail.len(),
        name
    );
    let continuation = ChecklistSection::from_entries(name, tail, numbering_offset);
    checklist.insert_section(index + 1, continuation);
    true
}
