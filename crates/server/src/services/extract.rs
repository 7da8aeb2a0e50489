//! Document text extraction collaborator.
//!
//! Text extraction is delegated to an external service; this module never
//! parses document formats itself. The interface is deliberately narrow:
//! bytes in, text out.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors from the extraction collaborator.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Transport-level failure talking to the extraction service.
    #[error("extraction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service could not extract text from the document.
    #[error("extraction service returned status {0}")]
    Failed(u16),
}

/// Extracts plain text from an uploaded document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from the document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the extraction service fails or rejects
    /// the document.
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ExtractError>;
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    text: String,
}

/// HTTP client for the document extraction service.
pub struct HttpTextExtractor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTextExtractor {
    /// Create a new extractor client.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl TextExtractor for HttpTextExtractor {
    async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ExtractError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/v1/extract", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExtractError::Failed(response.status().as_u16()));
        }

        let body: ExtractResponse = response.json().await?;
        Ok(body.text)
    }
}
