//! Filesystem front end of the pipeline.
//!
//! Files are written through a temporary file in the destination directory
//! that is only persisted once the document is complete, so a failed
//! conversion never leaves a truncated file behind.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use preflight_core::{
    Checklist, PipelineError, document_to_json, layout_document, markup_to_pdf, parse_markup,
    render_pdf,
};
use tempfile::NamedTempFile;

const PDF_EXTENSION: &str = "pdf";

/// Reads and parses a markup file.
pub fn load_checklist<P: AsRef<Path>>(path: P) -> Result<(Checklist, Vec<String>), PipelineError> {
    let path = path.as_ref();
    debug!("Reading checklist markup from {}", path.display());
    let markup = fs::read_to_string(path)?;
    parse_markup(&markup)
}

pub fn generate_pdf_bytes(markup: &str) -> Result<Vec<u8>, PipelineError> {
    Ok(markup_to_pdf(markup)?.output)
}

/// Parses `markup` and writes the PDF to `path`. Returns the laid-out
/// checklist.
pub fn generate_to_file<P: AsRef<Path>>(markup: &str, path: P) -> Result<Checklist, PipelineError> {
    let (mut checklist, _) = parse_markup(markup)?;
    write_pdf(&mut checklist, path)?;
    Ok(checklist)
}

/// Parses `markup` and writes the JSON page description to `path`.
pub fn generate_json_to_file<P: AsRef<Path>>(markup: &str, path: P) -> Result<Checklist, PipelineError> {
    let (mut checklist, _) = parse_markup(markup)?;
    write_json(&mut checklist, path)?;
    Ok(checklist)
}

pub fn write_pdf<P: AsRef<Path>>(checklist: &mut Checklist, path: P) -> Result<(), PipelineError> {
    persist_with(path.as_ref(), |out| {
        render_pdf(checklist, out)?;
        Ok(())
    })
}

pub fn write_json<P: AsRef<Path>>(checklist: &mut Checklist, path: P) -> Result<(), PipelineError> {
    persist_with(path.as_ref(), |out| {
        let json = document_to_json(&layout_document(checklist)?)?;
        out.write_all(json.as_bytes())?;
        Ok(())
    })
}

/// Where the PDF for `input` goes. A directory `output` (existing, or
/// spelled with a trailing separator) receives `<input stem>.pdf`; any
/// other path gets a `.pdf` suffix unless it already has one.
pub fn resolve_output_path(input: &Path, output: &Path) -> PathBuf {
    let spelled = output.as_os_str().to_string_lossy();
    let names_directory = output.is_dir() || spelled.ends_with('/') || spelled.ends_with('\\');
    if names_directory {
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        return output.join(format!("{}.{}", stem.to_string_lossy(), PDF_EXTENSION));
    }
    let has_pdf_extension = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION));
    if has_pdf_extension {
        output.to_path_buf()
    } else {
        let mut name = output.as_os_str().to_owned();
        name.push(".");
        name.push(PDF_EXTENSION);
        PathBuf::from(name)
    }
}

fn persist_with<F>(path: &Path, write: F) -> Result<(), PipelineError>
where
    F: FnOnce(&mut BufWriter<&mut fs::File>) -> Result<(), PipelineError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(temp.as_file_mut());
        write(&mut out)?;
        out.flush()?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    info!("Wrote {}", path.display());
    Ok(())
}
