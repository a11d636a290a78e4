use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfTrError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch language list: {0}")]
    LanguagesStatus(u16),

    #[error("Failed to translate PDF: {status} {body}")]
    TranslateStatus { status: u16, body: String },

    #[error("Failed to download PDF: {0}")]
    DownloadStatus(u16),

    #[error("Service health check failed: {0}")]
    HealthStatus(u16),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

impl PdfTrError {
    /// HTTP status carried by the error, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::LanguagesStatus(status)
            | Self::DownloadStatus(status)
            | Self::HealthStatus(status)
            | Self::TranslateStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
