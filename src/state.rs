use crate::domain::error::PdfTrError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::ServiceClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub service: ServiceClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, PdfTrError> {
        let http_client = create_client(&config)?;
        let service = ServiceClient::new(http_client, &config.base_url);

        Ok(Self {
            config,
            service,
        })
    }
}
