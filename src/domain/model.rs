use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::PdfTrError;

pub const PDF_MIME: &str = "application/pdf";

// 服务端返回的语言名称，如 "English"、"Chinese"
pub type Language = String;

/// How the service lays out original and translated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderMode {
    #[default]
    Interleave,
    SideBySide,
    TranslationOnly,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Interleave => "INTERLEAVE",
            RenderMode::SideBySide => "SIDE_BY_SIDE",
            RenderMode::TranslationOnly => "TRANSLATION_ONLY",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = PdfTrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "INTERLEAVE" => Ok(RenderMode::Interleave),
            "SIDE_BY_SIDE" => Ok(RenderMode::SideBySide),
            "TRANSLATION_ONLY" => Ok(RenderMode::TranslationOnly),
            other => Err(PdfTrError::InvalidInput(format!(
                "Unknown render mode: {}",
                other
            ))),
        }
    }
}

/// Per-call options for `/translate_pdf/`.
///
/// `page_from` and `page_to` of 0 mean "all pages".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    pub translate_all: bool,
    pub page_from: u32,
    pub page_to: u32,
    pub render_mode: RenderMode,
    pub add_blank_page: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            translate_all: true,
            page_from: 0,
            page_to: 0,
            render_mode: RenderMode::Interleave,
            add_blank_page: false,
        }
    }
}

// 单次翻译请求，不做持久化
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub pdf: Vec<u8>,
    pub from_lang: Language,
    pub to_lang: Language,
    pub options: TranslateOptions,
}

impl TranslationRequest {
    pub fn new(pdf: Vec<u8>, from_lang: &str, to_lang: &str) -> Self {
        Self {
            pdf,
            from_lang: from_lang.to_string(),
            to_lang: to_lang.to_string(),
            options: TranslateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }
}

/// Translated PDF payload. The bytes are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfBlob {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl PdfBlob {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            content_type: PDF_MIME.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}

// GET / 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

// GET /health 的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
