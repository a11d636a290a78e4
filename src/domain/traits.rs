use crate::domain::error::PdfTrError;
use crate::domain::model::{Language, PdfBlob, TranslationRequest};
use async_trait::async_trait;

/// Remote PDF translation service.
///
/// The HTTP client implements this; tests swap in an in-memory fake.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Languages the service accepts, in server order
    async fn supported_languages(&self) -> Result<Vec<Language>, PdfTrError>;

    /// Upload a PDF and receive the translated document
    async fn translate(&self, request: TranslationRequest) -> Result<PdfBlob, PdfTrError>;
}

/// Fetches PDF bytes from a remote address.
#[async_trait]
pub trait PdfDownloader: Send + Sync {
    async fn download_pdf(&self, url: &str) -> Result<Vec<u8>, PdfTrError>;
}

/// Host capability that shows a URL to the user in a new tab or viewer.
pub trait TabOpener: Send + Sync {
    fn open_in_new_tab(&self, url: &str) -> Result<(), PdfTrError>;
}
