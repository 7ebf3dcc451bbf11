use preflight_model::{Checklist, ChecklistSection, SectionItem};
use preflight_render_core::RecordingSurface;
use preflight_style::Configuration;

use crate::engine::LayoutEngine;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn row(left: &str, right: &str) -> SectionItem {
    SectionItem::new(Some(left.to_string()), Some(right.to_string())).unwrap()
}

/// A section with one top-level row per element of `subitems`, each
/// carrying that many nested rows.
pub fn section_with_items(name: &str, subitems: &[usize]) -> ChecklistSection {
    let mut section = ChecklistSection::new(name);
    for (i, count) in subitems.iter().enumerate() {
        let mut item = row(&format!("Item {}", i + 1), "CHECK");
        for j in 0..*count {
            item.append_subitem(row(&format!("Sub {}", j + 1), "SET"));
        }
        section.append_entry(item);
    }
    section
}

pub fn checklist_with(sections: Vec<ChecklistSection>) -> Checklist {
    checklist_with_config(Configuration::default(), sections)
}

pub fn checklist_with_config(config: Configuration, sections: Vec<ChecklistSection>) -> Checklist {
    let mut checklist = Checklist::new(config);
    checklist.aircraft_type = "C172".into();
    checklist.checklist_type = "Normal".into();
    checklist.checklist_version = "1.0".into();
    for section in sections {
        checklist.append_section(section);
    }
    checklist
}

pub fn recording_engine(checklist: &Checklist) -> LayoutEngine<RecordingSurface> {
    LayoutEngine::new(RecordingSurface::new(), checklist)
}
