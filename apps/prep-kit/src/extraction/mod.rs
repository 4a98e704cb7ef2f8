//! Plain-text extraction from uploaded PDFs.
//!
//! Extraction is best-effort per page: a page with no extractable text
//! contributes nothing. Pages that do yield text are joined with a blank line.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::AppError;

/// Extracts the text of every page of the PDF at `path`.
///
/// Returns an empty string when no page yields text. Fails if the file cannot
/// be read or is not a parseable PDF.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError::Extraction {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }))
    .map_err(|_| AppError::Extraction {
        path: path.to_path_buf(),
        detail: "PDF parser panicked".to_string(),
    })?
    .map_err(|e| AppError::Extraction {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let page_count = pages.len();
    let text = join_pages(pages);
    debug!(
        path = %path.display(),
        pages = page_count,
        chars = text.len(),
        "Extracted PDF text"
    );
    if text.is_empty() {
        warn!(path = %path.display(), "PDF yielded no extractable text");
    }
    Ok(text)
}

/// Joins non-blank page texts with a blank line and trims the result.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::letter_geometry;
    use crate::render::{render_document, RenderJob};

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let pages = vec![
            "Senior Engineer\n".to_string(),
            "   \n".to_string(),
            String::new(),
            "Requirements".to_string(),
        ];
        assert_eq!(join_pages(pages), "Senior Engineer\n\n\nRequirements");
    }

    #[test]
    fn test_join_pages_trims_outer_whitespace() {
        let pages = vec!["\n\n  Title".to_string(), "Body  \n".to_string()];
        assert_eq!(join_pages(pages), "Title\n\nBody");
    }

    #[test]
    fn test_join_pages_empty_when_nothing_extracted() {
        assert_eq!(join_pages(Vec::<String>::new()), "");
        assert_eq!(join_pages(vec![" ".to_string(), "\n".to_string()]), "");
    }

    #[test]
    fn test_missing_file_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text(&dir.path().join("absent.pdf")).unwrap_err();
        assert!(matches!(err, AppError::Extraction { .. }), "got {err:?}");
    }

    #[test]
    fn test_non_pdf_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"this is plain text, not a PDF").unwrap();
        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, AppError::Extraction { .. }), "got {err:?}");
    }

    #[test]
    fn test_extracts_text_from_rendered_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.pdf");
        let job = RenderJob {
            body: "Responsibilities\nDesign reliable payment services\n\nRequirements\nRust Kubernetes"
                .to_string(),
            title: "Backend Engineer".to_string(),
            subtitle: None,
            output: path.clone(),
        };
        render_document(&job, &letter_geometry()).unwrap();

        let text = extract_text(&path).unwrap();
        for word in ["Backend", "Engineer", "Responsibilities", "payment", "Kubernetes"] {
            assert!(text.contains(word), "'{word}' missing from extracted text: {text:?}");
        }
        assert_eq!(text, text.trim());
    }
}
