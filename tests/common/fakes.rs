//! In-memory stand-ins for the service, downloader, opener and view

use async_trait::async_trait;
use pdftr::domain::error::PdfTrError;
use pdftr::domain::model::{Language, PdfBlob, TranslationRequest};
use pdftr::domain::traits::{PdfDownloader, TabOpener, TranslationService};
use pdftr::presentation::view_model::{UiChange, UiObserver};
use std::sync::Mutex;

pub struct FakeService {
    languages: Result<Vec<Language>, u16>,
    translated: Result<Vec<u8>, (u16, String)>,
    pub requests: Mutex<Vec<TranslationRequest>>,
}

impl FakeService {
    pub fn new(languages: &[&str], translated: &[u8]) -> Self {
        Self {
            languages: Ok(languages.iter().map(|l| l.to_string()).collect()),
            translated: Ok(translated.to_vec()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_languages(status: u16) -> Self {
        Self {
            languages: Err(status),
            translated: Ok(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_translate(languages: &[&str], status: u16, body: &str) -> Self {
        Self {
            translated: Err((status, body.to_string())),
            ..Self::new(languages, b"")
        }
    }

    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationService for FakeService {
    async fn supported_languages(&self) -> Result<Vec<Language>, PdfTrError> {
        self.languages
            .clone()
            .map_err(PdfTrError::LanguagesStatus)
    }

    async fn translate(&self, request: TranslationRequest) -> Result<PdfBlob, PdfTrError> {
        self.requests.lock().unwrap().push(request);
        match &self.translated {
            Ok(data) => Ok(PdfBlob::new(data.clone())),
            Err((status, body)) => Err(PdfTrError::TranslateStatus {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub struct FakeDownloader {
    result: Result<Vec<u8>, u16>,
    pub urls: Mutex<Vec<String>>,
}

impl FakeDownloader {
    pub fn new(data: &[u8]) -> Self {
        Self {
            result: Ok(data.to_vec()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfDownloader for FakeDownloader {
    async fn download_pdf(&self, url: &str) -> Result<Vec<u8>, PdfTrError> {
        self.urls.lock().unwrap().push(url.to_string());
        self.result.clone().map_err(PdfTrError::DownloadStatus)
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl TabOpener for RecordingOpener {
    fn open_in_new_tab(&self, url: &str) -> Result<(), PdfTrError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub changes: Mutex<Vec<UiChange>>,
}

impl RecordingObserver {
    pub fn changes(&self) -> Vec<UiChange> {
        self.changes.lock().unwrap().clone()
    }

    pub fn count(&self, change: &UiChange) -> usize {
        self.changes().iter().filter(|c| *c == change).count()
    }

    pub fn errors_hidden(&self) -> usize {
        self.count(&UiChange::ErrorHidden)
    }
}

impl UiObserver for RecordingObserver {
    fn on_change(&self, change: &UiChange) {
        self.changes.lock().unwrap().push(change.clone());
    }
}
