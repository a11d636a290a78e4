// HTTP client utilities
use crate::domain::error::PdfTrError;
use crate::infrastructure::config::Config;
use reqwest::Client;

/// Create the shared HTTP client.
///
/// No request timeout is set: a slow translation must not be cut off.
pub fn create_client(config: &Config) -> Result<Client, PdfTrError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("pdftr/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| PdfTrError::Config(format!("Invalid http_proxy '{}': {}", proxy, e)))?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}
