use async_trait::async_trait;

use crate::application::ports::document_extractor::{
    DocumentExtractor, DocumentKind, ExtractionError,
};

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for PlainTextExtractor {
    async fn extract(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
        if !self.can_extract(kind) {
            return Err(ExtractionError::UnsupportedFormat(kind.to_string()));
        }

        String::from_utf8(data.to_vec()).map_err(|e| ExtractionError::InvalidEncoding(e.to_string()))
    }

    fn can_extract(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::PlainText
    }
}
