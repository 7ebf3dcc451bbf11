#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use lopdf::Object;
use lopdf::content::Content;

/// Operands of every `Tj` on a page, in drawing order.
pub fn shown_strings(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}

/// All shown strings of the document, one line per string.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_number in 1..=doc.get_pages().len() as u32 {
        for shown in shown_strings(doc, page_number) {
            text.push_str(&shown);
            text.push('\n');
        }
    }
    text
}

/// BaseFont names of every font dictionary in the file, nested ones
/// included.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    fn collect(object: &Object, fonts: &mut Vec<String>) {
        let Ok(dict) = object.as_dict() else {
            return;
        };
        if let Ok(name) = dict.get(b"BaseFont").and_then(|f| f.as_name()) {
            fonts.push(String::from_utf8_lossy(name).into_owned());
        }
        for (_, value) in dict.iter() {
            collect(value, fonts);
        }
    }

    let mut fonts = Vec::new();
    for object in doc.objects.values() {
        collect(object, &mut fonts);
    }
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that a page shows a string as one text run
#[macro_export]
macro_rules! assert_page_shows {
    ($pdf:expr, $page:expr, $text:expr) => {
        let shown = $pdf.shown_strings($page);
        assert!(
            shown.iter().any(|s| s == $text),
            "Page {} should show '{}', shown strings were: {:?}",
            $page,
            $text,
            shown
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should have font matching '{}', found: {:?}",
            $pattern,
            fonts
        );
    };
}
