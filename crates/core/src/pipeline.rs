//! Markup in, pages out.
//!
//! Every entry point runs the same stages: parse the markup (directives
//! included), paginate the checklist on a surface and finalize the surface.
//! A failure at any stage aborts before finalization.

use std::io::Write;

use log::{debug, info};
use preflight_layout::paginate;
use preflight_markup::parse_checklist;
use preflight_model::Checklist;
use preflight_render_core::{PaginatedDocument, RecordingSurface};
use preflight_render_lopdf::LopdfSurface;

use crate::error::PipelineError;

/// The output of a conversion along with the laid-out checklist. Sections
/// split during pagination show up as continuation sections in `checklist`.
#[derive(Debug, Clone)]
pub struct Generated<T> {
    pub output: T,
    pub checklist: Checklist,
    pub unknown_keys: Vec<String>,
}

/// Parses markup into a checklist. Unknown directive keys are handed back
/// to the caller; the parser has already logged them.
pub fn parse_markup(markup: &str) -> Result<(Checklist, Vec<String>), PipelineError> {
    let outcome = parse_checklist(markup)?;
    debug!(
        "Parsed checklist '{}' with {} sections",
        document_title(&outcome.checklist),
        outcome.checklist.section_count()
    );
    Ok((outcome.checklist, outcome.unknown_keys))
}

/// The PDF document title: aircraft type and checklist type.
pub fn document_title(checklist: &Checklist) -> String {
    format!("{} {}", checklist.aircraft_type, checklist.checklist_type)
        .trim()
        .to_string()
}

/// Paginates onto a recording surface and returns the page description.
pub fn layout_document(checklist: &mut Checklist) -> Result<PaginatedDocument, PipelineError> {
    let surface = paginate(checklist, RecordingSurface::new())?;
    let document = surface.into_document();
    info!("Laid out {} page(s)", document.page_count());
    Ok(document)
}

/// Paginates straight into a PDF written to `output`, which is returned
/// once the document is complete.
pub fn render_pdf<W: Write>(checklist: &mut Checklist, output: W) -> Result<W, PipelineError> {
    let surface = LopdfSurface::new(output).with_title(document_title(checklist));
    let surface = paginate(checklist, surface)?;
    info!("Rendered PDF for '{}'", document_title(checklist));
    Ok(surface.into_inner())
}

pub fn document_to_json(document: &PaginatedDocument) -> Result<String, PipelineError> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn markup_to_document(markup: &str) -> Result<Generated<PaginatedDocument>, PipelineError> {
    let (mut checklist, unknown_keys) = parse_markup(markup)?;
    let output = layout_document(&mut checklist)?;
    Ok(Generated {
        output,
        checklist,
        unknown_keys,
    })
}

pub fn markup_to_pdf(markup: &str) -> Result<Generated<Vec<u8>>, PipelineError> {
    let (mut checklist, unknown_keys) = parse_markup(markup)?;
    let output = render_pdf(&mut checklist, Vec::new())?;
    Ok(Generated {
        output,
        checklist,
        unknown_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEFORE_START: &str = "\
// Aircraft Type = C172
// Checklist Type = Normal
#Before Start
-Battery..ON
-Avionics..ON
";

    #[test]
    fn test_document_title_joins_aircraft_and_type() {
        let (checklist, _) = parse_markup(BEFORE_START).unwrap();
        assert_eq!(document_title(&checklist), "C172 Normal");
        assert_eq!(document_title(&Checklist::default()), "");
    }

    #[test]
    fn test_markup_to_document_lays_out_one_page() {
        let generated = markup_to_document(BEFORE_START).unwrap();
        assert_eq!(generated.output.page_count(), 1);
        assert!(generated.unknown_keys.is_empty());
        let texts: Vec<&str> = generated.output.pages[0].texts().collect();
        for expected in ["C172", "Normal", "Before Start", "1.", "2.", "Battery", "ON"] {
            assert!(texts.contains(&expected), "missing '{}' in {:?}", expected, texts);
        }
    }

    #[test]
    fn test_unknown_keys_are_reported_not_fatal() {
        let markup = format!("// Cabin Lights = dim\n{}", BEFORE_START);
        let generated = markup_to_document(&markup).unwrap();
        assert_eq!(generated.unknown_keys, vec!["Cabin Lights".to_string()]);
    }

    #[test]
    fn test_invalid_option_value_is_rejected() {
        let markup = format!("// font_size_item = huge\n{}", BEFORE_START);
        let err = markup_to_document(&markup).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigurationRejected(_)));
    }

    #[test]
    fn test_subitem_without_item_is_malformed() {
        let err = markup_to_pdf("#Before Start\n+Voltmeter..CHECK\n").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedDocument(_)));
    }

    #[test]
    fn test_markup_to_pdf_produces_pdf_bytes() {
        let generated = markup_to_pdf(BEFORE_START).unwrap();
        assert!(generated.output.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_json_dump_names_elements() {
        let generated = markup_to_document(BEFORE_START).unwrap();
        let json = document_to_json(&generated.output).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("Battery"));
    }
}
