use crate::application::input::{read_local_pdf, SelectedFile};
use crate::domain::error::PdfTrError;
use crate::domain::model::{TranslateOptions, TranslationRequest};
use crate::domain::traits::{PdfDownloader, TabOpener, TranslationService};
use crate::presentation::display::{display_translated_pdf, BlobStore};
use crate::presentation::view_model::ViewModel;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The file input's change event
#[derive(Debug, Clone, Default)]
pub struct FileChangeEvent {
    pub files: Vec<SelectedFile>,
}

/// The URL form's submit event
#[derive(Debug, Clone, Default)]
pub struct UrlSubmitEvent {
    default_prevented: bool,
}

impl UrlSubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of handling a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do (no file, not a PDF, empty URL...)
    Ignored,
    /// Translated document opened at this URL
    Displayed(String),
    /// Error message shown to the user
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct LanguageDefaults {
    pub from: String,
    pub to: String,
}

impl Default for LanguageDefaults {
    fn default() -> Self {
        Self {
            from: "English".to_string(),
            to: "Chinese".to_string(),
        }
    }
}

/// Connects the panel's events to the translation service
pub struct PdfTranslatorApp {
    view: ViewModel,
    service: Arc<dyn TranslationService>,
    downloader: Arc<dyn PdfDownloader>,
    opener: Arc<dyn TabOpener>,
    store: BlobStore,
    defaults: LanguageDefaults,
    options: TranslateOptions,
}

impl PdfTranslatorApp {
    pub fn new(
        view: ViewModel,
        service: Arc<dyn TranslationService>,
        downloader: Arc<dyn PdfDownloader>,
        opener: Arc<dyn TabOpener>,
        store: BlobStore,
    ) -> Self {
        Self {
            view,
            service,
            downloader,
            opener,
            store,
            defaults: LanguageDefaults::default(),
            options: TranslateOptions::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: LanguageDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Fetch the language list and fill both selectors.
    ///
    /// Failures are logged only; the selectors keep their previous content.
    pub async fn init(&self) -> bool {
        match self.service.supported_languages().await {
            Ok(languages) => {
                self.view
                    .populate_languages(&languages, &self.defaults.from, &self.defaults.to)
            }
            Err(e) => {
                error!("Failed to initialize language selectors: {}", e);
                false
            }
        }
    }

    pub async fn handle_file_change(&self, event: FileChangeEvent) -> Outcome {
        if !self.view.snapshot().file_input {
            return Outcome::Ignored;
        }
        let Some(file) = event.files.into_iter().next() else {
            return Outcome::Ignored;
        };
        if !file.is_pdf() {
            info!("Ignoring non-PDF file {} ({})", file.name, file.mime);
            return Outcome::Ignored;
        }
        let Some((from, to)) = self.selected_languages() else {
            return Outcome::Ignored;
        };

        self.handle_local_pdf_file(&file, &from, &to).await
    }

    pub async fn handle_url_submit(&self, event: &mut UrlSubmitEvent) -> Outcome {
        if !self.view.snapshot().url_form {
            return Outcome::Ignored;
        }
        event.prevent_default();

        let Some(url) = self.view.url_input() else {
            return Outcome::Ignored;
        };
        let url = url.trim();
        if url.is_empty() {
            return Outcome::Ignored;
        }
        let Some((from, to)) = self.selected_languages() else {
            return Outcome::Ignored;
        };

        self.handle_remote_pdf_url(url, &from, &to).await
    }

    pub async fn handle_local_pdf_file(&self, file: &SelectedFile, from: &str, to: &str) -> Outcome {
        let _loading = self.view.loading();

        let result: Result<String, PdfTrError> = async {
            let pdf = read_local_pdf(file).await?;
            self.translate_and_display(pdf, from, to).await
        }
        .await;

        self.finish(result, "Failed to process PDF file")
    }

    pub async fn handle_remote_pdf_url(&self, url: &str, from: &str, to: &str) -> Outcome {
        let _loading = self.view.loading();

        let result: Result<String, PdfTrError> = async {
            let pdf = self.downloader.download_pdf(url).await?;
            self.translate_and_display(pdf, from, to).await
        }
        .await;

        self.finish(result, "Failed to process remote PDF")
    }

    async fn translate_and_display(
        &self,
        pdf: Vec<u8>,
        from: &str,
        to: &str,
    ) -> Result<String, PdfTrError> {
        let request = TranslationRequest::new(pdf, from, to).with_options(self.options.clone());
        let translated = self.service.translate(request).await?;
        display_translated_pdf(&translated, &self.store, self.opener.as_ref()).await
    }

    fn finish(&self, result: Result<String, PdfTrError>, context: &str) -> Outcome {
        match result {
            Ok(url) => Outcome::Displayed(url),
            Err(e) => {
                error!("{}: {}", context, e);
                let message = format!("{}: {}", context, e);
                self.view.show_error(&message);
                Outcome::Failed(message)
            }
        }
    }

    fn selected_languages(&self) -> Option<(String, String)> {
        let selection = self.view.selected_languages();
        if selection.is_none() {
            warn!("No source/target language selected");
        }
        selection
    }
}
