use crate::domain::error::PdfTrError;
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

/// Download a remote PDF fully into memory.
///
/// No size cap and no streaming: the caller gets the whole body or an error.
pub async fn download_pdf(client: &Client, url: &str) -> Result<Vec<u8>, PdfTrError> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| PdfTrError::InvalidInput(format!("Invalid PDF URL '{}': {}", url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PdfTrError::InvalidInput(format!(
            "Unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }

    debug!("Downloading PDF from {}", parsed);
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if !status.is_success() {
        error!("PDF download returned {}", status);
        return Err(PdfTrError::DownloadStatus(status.as_u16()));
    }

    let data = response.bytes().await?;
    debug!("Downloaded {} bytes", data.len());
    Ok(data.to_vec())
}
