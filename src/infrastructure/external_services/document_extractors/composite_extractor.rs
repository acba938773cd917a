use async_trait::async_trait;
use std::sync::Arc;

use super::{PdfExtractor, PlainTextExtractor};
use crate::application::ports::document_extractor::{
    DocumentExtractor, DocumentKind, ExtractionError,
};

pub struct CompositeExtractor {
    pdf_extractor: Arc<PdfExtractor>,
    text_extractor: Arc<PlainTextExtractor>,
}

impl CompositeExtractor {
    pub fn new() -> Self {
        Self {
            pdf_extractor: Arc::new(PdfExtractor::new()),
            text_extractor: Arc::new(PlainTextExtractor::new()),
        }
    }

    fn extractor_for(&self, kind: DocumentKind) -> Option<Arc<dyn DocumentExtractor>> {
        if self.pdf_extractor.can_extract(kind) {
            Some(self.pdf_extractor.clone())
        } else if self.text_extractor.can_extract(kind) {
            Some(self.text_extractor.clone())
        } else {
            None
        }
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for CompositeExtractor {
    async fn extract(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
        let extractor = self
            .extractor_for(kind)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(kind.to_string()))?;

        extractor.extract(data, kind).await
    }

    fn can_extract(&self, kind: DocumentKind) -> bool {
        self.pdf_extractor.can_extract(kind) || self.text_extractor.can_extract(kind)
    }
}
