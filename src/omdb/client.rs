use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::LookupResponse;
use crate::configuration::OmdbSettings;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("OMDb request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OMDb returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A request-by-title lookup against a movie information service.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn find_by_title(&self, title: &str) -> Result<LookupResponse, LookupError>;
}

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(settings: &OmdbSettings) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_milliseconds))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn find_by_title(&self, title: &str) -> Result<LookupResponse, LookupError> {
        let response = match self
            .client
            .get(self.base_url.as_str())
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
        {
            Ok(res) => {
                tracing::info!(status = %res.status(), "Got OMDb response");
                res
            }
            Err(err) => {
                tracing::error!("OMDb request error {:#?}", err);
                return Err(err.into());
            }
        };

        // OMDb answers bad keys with a 401 that still carries an `Error` body.
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<LookupResponse>(&body);
        if let Err(err) = &parsed {
            tracing::error!("Failed to decode OMDb body: {}", err);
        }
        Ok(parsed?)
    }
}
