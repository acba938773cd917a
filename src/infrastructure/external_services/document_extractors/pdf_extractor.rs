use async_trait::async_trait;
use lopdf::Document;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::application::ports::document_extractor::{
    DocumentExtractor, DocumentKind, ExtractionError,
};

pub struct PdfExtractor {
    password: String,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self {
            password: String::new(),
        }
    }

    /// Blocking extraction body, run on the blocking pool. Pages that fail to
    /// decode are skipped with a warning; only a fully empty document is an
    /// error.
    fn extract_pdf_text(data: &[u8], password: &str) -> Result<String, ExtractionError> {
        let mut doc =
            Document::load_mem(data).map_err(|e| ExtractionError::CorruptedFile(e.to_string()))?;

        if doc.is_encrypted() {
            doc.decrypt(password).map_err(|_| {
                ExtractionError::ExtractionFailed(
                    "Failed to decrypt PDF - invalid password".to_string(),
                )
            })?;
        }

        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();

        let extracted: Vec<Result<Vec<String>, String>> = page_numbers
            .into_par_iter()
            .map(|page_num| -> Result<Vec<String>, String> {
                let text = doc
                    .extract_text(&[page_num])
                    .map_err(|e| format!("page {}: {}", page_num, e))?;

                let lines: Vec<String> = text
                    .split('\n')
                    .map(|line| line.trim_end().to_string())
                    .filter(|line| !line.is_empty())
                    .collect();

                Ok(lines)
            })
            .collect();

        let mut all_lines = Vec::new();
        for page_result in extracted {
            match page_result {
                Ok(lines) => all_lines.extend(lines),
                Err(e) => tracing::warn!("Skipping unreadable PDF page: {}", e),
            }
        }

        let combined = all_lines.join("\n");
        if combined.trim().is_empty() {
            return Err(ExtractionError::NoExtractableText);
        }

        Ok(combined)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract(&self, data: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
        if !self.can_extract(kind) {
            return Err(ExtractionError::UnsupportedFormat(kind.to_string()));
        }

        let data = data.to_vec();
        let password = self.password.clone();

        tokio::task::spawn_blocking(move || Self::extract_pdf_text(&data, &password))
            .await
            .map_err(|e| {
                ExtractionError::ExtractionFailed(format!("Extraction task failed: {}", e))
            })?
    }

    fn can_extract(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[tokio::test]
    async fn test_extracts_text_from_generated_pdf() {
        let data = pdf_with_text("Hello analysis pipeline");
        let extractor = PdfExtractor::new();

        let text = extractor.extract(&data, DocumentKind::Pdf).await.unwrap();

        assert!(text.contains("Hello analysis pipeline"));
    }

    #[tokio::test]
    async fn test_rejects_garbage_bytes() {
        let extractor = PdfExtractor::new();

        let result = extractor.extract(b"not a pdf at all", DocumentKind::Pdf).await;

        assert!(matches!(result, Err(ExtractionError::CorruptedFile(_))));
    }

    #[tokio::test]
    async fn test_refuses_wrong_kind() {
        let extractor = PdfExtractor::new();

        let result = extractor
            .extract(b"plain text bytes", DocumentKind::PlainText)
            .await;

        assert!(matches!(result, Err(ExtractionError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_can_extract() {
        let extractor = PdfExtractor::new();

        assert!(extractor.can_extract(DocumentKind::Pdf));
        assert!(!extractor.can_extract(DocumentKind::PlainText));
    }
}
