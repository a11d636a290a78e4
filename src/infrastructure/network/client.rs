use crate::domain::error::PdfTrError;
use crate::domain::model::{
    HealthStatus, Language, LanguagesResponse, PdfBlob, ServiceInfo, TranslateOptions,
    TranslationRequest, PDF_MIME,
};
use crate::domain::traits::{PdfDownloader, TranslationService};
use crate::infrastructure::network::download::download_pdf;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, error, warn};

/// Client for the PDF translation service REST API
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /languages
    pub async fn get_supported_languages(&self) -> Result<Vec<Language>, PdfTrError> {
        let url = self.endpoint("/languages");
        debug!("Fetching language list from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Language list request failed: {}", e);
            PdfTrError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Language list request returned {}", status);
            return Err(PdfTrError::LanguagesStatus(status.as_u16()));
        }

        let data = response.json::<LanguagesResponse>().await?;
        debug!("Service supports {} languages", data.languages.len());
        Ok(data.languages)
    }

    /// Multipart POST /translate_pdf/, returns the translated document
    pub async fn translate_pdf(
        &self,
        pdf: Vec<u8>,
        from_lang: &str,
        to_lang: &str,
        options: &TranslateOptions,
    ) -> Result<PdfBlob, PdfTrError> {
        let url = self.endpoint("/translate_pdf/");
        debug!(
            "Translating {} bytes {} -> {} (all: {}, pages: {}-{}, mode: {})",
            pdf.len(),
            from_lang,
            to_lang,
            options.translate_all,
            options.page_from,
            options.page_to,
            options.render_mode
        );

        let form = translate_form(pdf, from_lang, to_lang, options)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Translate request failed: {}", e);
                PdfTrError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read translate error body: {}", e);
                    String::new()
                }
            };
            error!("Translate request returned {}: {}", status, body);
            return Err(PdfTrError::TranslateStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data = response.bytes().await?;
        debug!("Received translated PDF ({} bytes)", data.len());
        Ok(PdfBlob::new(data.to_vec()))
    }

    /// GET /
    pub async fn service_info(&self) -> Result<ServiceInfo, PdfTrError> {
        let url = self.endpoint("/");
        debug!("Fetching service info from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Service info request failed: {}", e);
            PdfTrError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Service info request returned {}", status);
            return Err(PdfTrError::HealthStatus(status.as_u16()));
        }
        Ok(response.json::<ServiceInfo>().await?)
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus, PdfTrError> {
        let url = self.endpoint("/health");
        debug!("Checking service health at {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Health check request failed: {}", e);
            PdfTrError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Health check returned {}", status);
            return Err(PdfTrError::HealthStatus(status.as_u16()));
        }

        let health = response.json::<HealthStatus>().await?;
        debug!("Service reports status '{}'", health.status);
        Ok(health)
    }
}

/// Build the multipart body expected by the service
fn translate_form(
    pdf: Vec<u8>,
    from_lang: &str,
    to_lang: &str,
    options: &TranslateOptions,
) -> Result<Form, PdfTrError> {
    let part = Part::bytes(pdf)
        .file_name("document.pdf")
        .mime_str(PDF_MIME)?;

    let mut form = Form::new()
        .part("input_pdf", part)
        .text("from_lang", from_lang.to_string())
        .text("to_lang", to_lang.to_string())
        .text("translate_all", options.translate_all.to_string())
        .text("p_from", options.page_from.to_string())
        .text("p_to", options.page_to.to_string())
        .text("render_mode", options.render_mode.as_str());

    if options.add_blank_page {
        form = form.text("add_blank_page", "true");
    }

    Ok(form)
}

#[async_trait]
impl TranslationService for ServiceClient {
    async fn supported_languages(&self) -> Result<Vec<Language>, PdfTrError> {
        self.get_supported_languages().await
    }

    async fn translate(&self, request: TranslationRequest) -> Result<PdfBlob, PdfTrError> {
        self.translate_pdf(
            request.pdf,
            &request.from_lang,
            &request.to_lang,
            &request.options,
        )
        .await
    }
}

#[async_trait]
impl PdfDownloader for ServiceClient {
    async fn download_pdf(&self, url: &str) -> Result<Vec<u8>, PdfTrError> {
        download_pdf(&self.client, url).await
    }
}
