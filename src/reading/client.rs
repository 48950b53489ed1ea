use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ReadingConfig;

use super::error::FetchError;
use super::source::ReadingSource;

/// Reads a single numeric field from a JSON endpoint over HTTP.
pub struct HttpReadingSource {
    client: Client,
    url: String,
    field: String,
    timeout: Option<Duration>,
}

impl HttpReadingSource {
    pub fn new(config: &ReadingConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|source| FetchError::Transport {
                url: config.url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
            field: config.field.clone(),
            timeout: config.timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn do_fetch(&self) -> Result<f64, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| self.transport(source))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %self.url, status = status.as_u16(), "Reading endpoint rejected request");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport(source))?;

        extract_reading(&body, &self.field)
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl ReadingSource for HttpReadingSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<f64, FetchError> {
        let Some(limit) = self.timeout else {
            return self.do_fetch().await;
        };

        match timeout(limit, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: self.url.clone(),
                seconds: limit.as_secs(),
            }),
        }
    }
}

/// Pull the numeric `field` out of a JSON object body.
///
/// Non-objects and objects without the field are `MissingField`; `null`,
/// strings, booleans and nested values are `NotNumeric`.
pub fn extract_reading(body: &[u8], field: &str) -> Result<f64, FetchError> {
    let payload: Value = serde_json::from_slice(body)?;

    let Some(raw) = payload.get(field) else {
        return Err(FetchError::MissingField {
            field: field.to_string(),
        });
    };

    raw.as_f64().ok_or_else(|| FetchError::NotNumeric {
        field: field.to_string(),
        found: raw.to_string(),
    })
}
