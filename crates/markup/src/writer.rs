use preflight_model::{Checklist, SectionEntry, SectionItem};

use crate::{AIRCRAFT_TYPE_KEY, CHECKLIST_TYPE_KEY, CHECKLIST_VERSION_KEY, REAL_WORLD_CLEARANCE_KEY};

/// Serializes a checklist back into markup.
///
/// Only options that differ from their defaults are written. Nesting is
/// expressed by the line prefix alone, so rows nested deeper than one level
/// come back as subitems of their top-level ancestor, and a centered
/// heading that follows an item at section level is re-read as part of
/// that item.
pub fn write_checklist(checklist: &Checklist) -> String {
    let mut lines = Vec::new();
    let fields = [
        (AIRCRAFT_TYPE_KEY, checklist.aircraft_type.as_str()),
        (CHECKLIST_TYPE_KEY, checklist.checklist_type.as_str()),
        (CHECKLIST_VERSION_KEY, checklist.checklist_version.as_str()),
    ];
    for (key, value) in fields {
        if !value.is_empty() {
            lines.push(format!("// {} = {}", key, value));
        }
    }
    if checklist.real_world_clearance {
        lines.push(format!("// {} = true", REAL_WORLD_CLEARANCE_KEY));
    }
    for (key, value) in checklist.config.non_default_entries() {
        lines.push(format!("// {} = {}", key, value));
    }

    for section in checklist.sections() {
        lines.push(String::new());
        lines.push(format!("#{}", section.name));
        for entry in section.entries() {
            write_entry(&mut lines, entry, 0);
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn write_entry(lines: &mut Vec<String>, entry: &SectionEntry, depth: usize) {
    match entry {
        SectionEntry::CenteredText(heading) => lines.push(format!("={}", heading.text)),
        SectionEntry::Item(item) => {
            let line = if depth == 0 {
                format!("-{}", row_texts(item))
            } else if is_bold_label(item) {
                let prefix = if item.ignore_in_sequence() { "**" } else { "*" };
                format!("{}{}", prefix, item.text_left().unwrap_or_default())
            } else {
                format!("+{}", row_texts(item))
            };
            lines.push(line);
            for subitem in item.subitems() {
                write_entry(lines, subitem, depth + 1);
            }
        }
    }
}

fn is_bold_label(item: &SectionItem) -> bool {
    item.text_right().is_none() && item.text_left().is_some() && item.is_left_bold && !item.is_right_bold
}

fn row_texts(item: &SectionItem) -> String {
    match (item.text_left(), item.text_right()) {
        (Some(left), Some(right)) => format!("{}..{}", left, right),
        (Some(left), None) => left.to_string(),
        (None, Some(right)) => format!("..{}", right),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_checklist;

    const SOURCE: &str = "\
// Aircraft Type = C172
// Checklist Type = Normal
// Checklist Version = 2.1.0
// Real World Clearance = yes
// page_size = A4
// space_between_items = 14.5
#Before Start
=PREFLIGHT
-Battery..ON
+Voltmeter..CHECK
*Abort
**Note
=OR
-Avionics
-..SET
#Start
-Mixture..RICH
";

    #[test]
    fn test_parse_write_parse_is_stable() {
        let first = parse_checklist(SOURCE).unwrap().checklist;
        let written = write_checklist(&first);
        let second = parse_checklist(&written).unwrap().checklist;
        assert_eq!(first, second);
    }

    #[test]
    fn test_defaults_are_not_written() {
        let checklist = parse_checklist("#S\n-A..B\n").unwrap().checklist;
        assert_eq!(write_checklist(&checklist), "\n#S\n-A..B\n");
    }

    #[test]
    fn test_written_directives() {
        let checklist = parse_checklist(SOURCE).unwrap().checklist;
        let written = write_checklist(&checklist);
        assert!(written.starts_with("// Aircraft Type = C172\n"));
        assert!(written.contains("// Real World Clearance = true\n"));
        assert!(written.contains("// space_between_items = 14.5\n"));
        assert!(written.contains("// page_size = A4\n"));
        assert!(written.contains("**Note\n"));
        assert!(written.contains("-..SET\n"));
    }
}
