use thiserror::Error;

/// A file received through the upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: Option<&str>, bytes: Vec<u8>) -> Self {
        let filename = filename
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("document")
            .to_string();
        Self { filename, bytes }
    }
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),
}

/// Document text extraction abstraction (allows mocking for tests)
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractionError>;
}

/// Stand-in OCR engine. Produces a fixed prescription line naming the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedOcr;

impl TextExtractor for SimulatedOcr {
    fn extract(&self, document: &UploadedDocument) -> Result<String, ExtractionError> {
        Ok(format!(
            "Simulated OCR of {}: Paracetamol 500mg twice daily for 5 days.",
            document.filename
        ))
    }
}
