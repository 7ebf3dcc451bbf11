//! Places every section of a checklist, splitting sections taller than a page.

use preflight_model::Checklist;
use preflight_render_core::PageSurface;

use crate::LayoutError;
use crate::algorithms::pagination::{entry_cost, split_section};
use crate::engine::LayoutEngine;

fn section_fits<S: PageSurface>(engine: &LayoutEngine<S>, checklist: &Checklist, index: usize) -> Result<bool, LayoutError> {
    match checklist.section(index) {
        Some(section) => engine.section_fits_page(section),
        None => Ok(true),
    }
}

/// Lays out `checklist` onto `surface` and returns the finalized surface.
///
/// A section that does not fit the rest of the page moves to a new page.
/// If it is taller than a whole page, the rows that do not fit are moved
/// into a continuation section inserted right after it, so the checklist
/// may gain sections. A checklist without sections still yields one page.
pub fn paginate<S: PageSurface>(checklist: &mut Checklist, surface: S) -> Result<S, LayoutError> {
    let mut engine = LayoutEngine::new(surface, checklist);

    let mut index = 0;
    while index < checklist.section_count() {
        if engine.page_number() == 0 || !section_fits(&engine, checklist, index)? {
            engine.add_page()?;
        }
        if !section_fits(&engine, checklist, index)? {
            let split = checklist
                .section(index)
                .map_or(0, |section| engine.split_index(section));
            if split == 0 {
                let (section, needed) = checklist
                    .section(index)
                    .map(|s| {
                        let first = s
                            .entries()
                            .first()
                            .map_or(0.0, |entry| entry_cost(0, entry, &checklist.config));
                        (s.name.clone(), first)
                    })
                    .unwrap_or_default();
                return Err(LayoutError::ElementTooLarge {
                    section,
                    needed,
                    available: engine.geometry().content_height(),
                });
            }
            split_section(checklist, index, split);
        }
        if let Some(section) = checklist.section(index) {
            engine.print_section(section)?;
            engine.finish_section();
        }
        index += 1;
    }

    if engine.page_number() == 0 {
        engine.add_page()?;
    }
    log::debug!(
        "Paginated {} sections onto {} pages",
        checklist.section_count(),
        engine.page_number()
    );
    engine.finish()
}
