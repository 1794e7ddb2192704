//! Document loading: turns a path (or `-` for stdin) into plain text for the analyzer.
//! Plain text, PDF text layers and Word (`.docx`) paragraphs are read; scanned PDFs
//! come back empty.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

/// Path value that means "read standard input".
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Format by file extension, case-insensitive.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "md" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "" => Err(AppError::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn load_document(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        debug!(chars = text.len(), "Read document from stdin");
        return Ok(text);
    }

    let text = match DocumentFormat::from_path(path)? {
        DocumentFormat::PlainText => std::fs::read_to_string(path)?,
        DocumentFormat::Pdf => extract_pdf_text(path)?,
        DocumentFormat::Docx => extract_docx_text(path)?,
    };
    debug!(path = %path.display(), chars = text.len(), "Loaded document");
    Ok(text)
}

fn extract_pdf_text(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }
    // pdf_extract can panic on malformed files
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text(path)
    }));
    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(e.to_string())),
        Err(_) => Err(AppError::Extraction(format!(
            "malformed PDF: {}",
            path.display()
        ))),
    }
}

/// Paragraph text of a Word document, one paragraph per line.
fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }
    docx_lite::extract_text(path)
        .map_err(|e| AppError::Extraction(format!("{}: {e}", path.display())))
}
