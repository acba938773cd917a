use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Picks the document kind from the uploaded filename's extension.
    /// Anything other than `.pdf` or `.txt` is unsupported.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;

        match extension.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::PlainText => "txt",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
pub enum ExtractionError {
    UnsupportedFormat(String),
    CorruptedFile(String),
    InvalidEncoding(String),
    NoExtractableText,
    ExtractionFailed(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::UnsupportedFormat(format) => {
                write!(f, "Unsupported format: {}", format)
            }
            ExtractionError::CorruptedFile(msg) => write!(f, "Corrupted file: {}", msg),
            ExtractionError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {}", msg),
            ExtractionError::NoExtractableText => {
                write!(f, "No extractable text found in the document")
            }
            ExtractionError::ExtractionFailed(msg) => write!(f, "Extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractionError>;

    fn can_extract(&self, kind: DocumentKind) -> bool;
}
