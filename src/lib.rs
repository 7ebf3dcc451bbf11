//! # preflight
//!
//! Typesets checklist markup into paginated, print-ready PDF checklists.
//!
//! ```no_run
//! let markup = "// Aircraft Type = C172\n#Before Start\n-Battery..ON\n";
//! let pdf = preflight::generate_pdf_bytes(markup)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), preflight::PipelineError>(())
//! ```
//!
//! The heavy lifting lives in the workspace crates re-exported through
//! [`preflight_core`]; this crate adds the filesystem helpers and the CLI.

pub mod generate;

pub use generate::{
    generate_json_to_file, generate_pdf_bytes, generate_to_file, load_checklist, resolve_output_path,
    write_json, write_pdf,
};
pub use preflight_core::*;
