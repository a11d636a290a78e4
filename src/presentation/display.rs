use crate::domain::error::PdfTrError;
use crate::domain::model::PdfBlob;
use crate::domain::traits::TabOpener;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

/// Turns in-memory blobs into navigable `file://` URLs.
///
/// Written files are never removed, the same way an object URL is never
/// revoked once handed to a tab.
#[derive(Debug, Clone)]
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn create_object_url(&self, blob: &PdfBlob) -> Result<String, PdfTrError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = std::path::absolute(self.dir.join(format!("{}.pdf", Uuid::new_v4())))?;
        tokio::fs::write(&path, &blob.data).await?;
        debug!(
            "Stored {} ({} bytes) at {}",
            blob.content_type,
            blob.len(),
            path.display()
        );

        let url = Url::from_file_path(&path).map_err(|_| {
            PdfTrError::InvalidInput(format!("Cannot build URL for {}", path.display()))
        })?;
        Ok(url.to_string())
    }
}

/// Show the translated document in a new tab, returns the URL it was opened at
pub async fn display_translated_pdf(
    blob: &PdfBlob,
    store: &BlobStore,
    opener: &dyn TabOpener,
) -> Result<String, PdfTrError> {
    let url = store.create_object_url(blob).await?;
    opener.open_in_new_tab(&url)?;
    info!("Opened translated PDF at {}", url);
    Ok(url)
}
