use crate::domain::error::PdfTrError;
use crate::domain::model::PDF_MIME;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file picked by the user, as a file input would report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
}

impl SelectedFile {
    /// Describe a local file, guessing its mime type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        let mime = if is_pdf {
            PDF_MIME
        } else {
            "application/octet-stream"
        };

        Self {
            path,
            name,
            mime: mime.to_string(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

/// Read the selected file's full contents
pub async fn read_local_pdf(file: &SelectedFile) -> Result<Vec<u8>, PdfTrError> {
    let data = tokio::fs::read(&file.path).await?;
    debug!("Read {} bytes from {}", data.len(), file.path.display());
    Ok(data)
}
