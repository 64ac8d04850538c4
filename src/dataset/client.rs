//! HTTP client for dataset downloads.

use super::error::LoadError;
use log::*;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Makes plain-text GET requests and rejects non-success responses.
///
pub struct Client {
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance.
    ///
    pub fn new() -> Result<Self, LoadError> {
        Ok(Client {
            http_client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
        })
    }

    /// Return the full response body as text, or an error for transport
    /// failures and non-success statuses.
    ///
    pub async fn get_text(&self, url: &str) -> Result<String, LoadError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Request for {} failed with status {}", url, status);
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let text = response.text().await?;
        debug!("Received {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
