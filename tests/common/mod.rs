pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use preflight::{PipelineError, PaginatedDocument, generate_pdf_bytes, markup_to_document};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown on a page, 1-based page number.
    pub fn shown_strings(&self, page_number: u32) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc, page_number)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn generate_pdf(markup: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = generate_pdf_bytes(markup)?;
    GeneratedPdf::from_bytes(bytes)
}

#[allow(dead_code)]
pub fn generate_document(markup: &str) -> Result<PaginatedDocument, PipelineError> {
    Ok(markup_to_document(markup)?.output)
}
