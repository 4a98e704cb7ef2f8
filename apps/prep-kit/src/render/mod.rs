//! Turns generated text into a paginated PDF on disk.
//!
//! Flow: `paginate` (pure layout into a page model) → `build_document`
//! (PDF objects) → single buffered write to the output path.
//!
//! The file is written in one pass at the end; an interrupted write leaves the
//! output path in an undefined state. There is no temp-file-and-rename step.

pub mod pdf;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::layout::{paginate, DocumentLayout, PageGeometry};

/// One document to render.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub body: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub output: PathBuf,
}

/// Lays out and writes `job` to `job.output`, creating the parent directory if needed.
///
/// Returns the layout that was written so callers can report page counts.
pub fn render_document(job: &RenderJob, geometry: &PageGeometry) -> Result<DocumentLayout, AppError> {
    let layout = paginate(&job.body, &job.title, job.subtitle.as_deref(), geometry);
    debug!(
        pages = layout.page_count(),
        body_chars = job.body.len(),
        "Laid out document"
    );

    write_pdf(&layout, job)?;
    info!(
        "Wrote {} ({} page{})",
        job.output.display(),
        layout.page_count(),
        if layout.page_count() == 1 { "" } else { "s" }
    );
    Ok(layout)
}

fn write_pdf(layout: &DocumentLayout, job: &RenderJob) -> Result<(), AppError> {
    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut doc = pdf::build_document(layout)?;

    let mut writer = BufWriter::new(File::create(&job.output)?);
    doc.save_to(&mut writer).map_err(|e| {
        AppError::Render(format!("failed to write '{}': {e}", job.output.display()))
    })?;
    writer.flush()?;
    Ok(())
}
