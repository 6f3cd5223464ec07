//! Quote fetch: one call to the quotes provider, first array element.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::{CredentialsConfig, UpstreamConfig};
use crate::error::{GatewayError, GatewayResult};

/// A single quote from the upstream provider.
#[derive(Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub category: Option<String>,
}

/// Client for the quotes provider.
#[derive(Debug, Clone)]
pub struct QuoteService {
    api_key: Option<String>,
    api_key_b64: Option<String>,
    quotes_url: String,
    http: Client,
}

impl QuoteService {
    pub fn new(upstream: &UpstreamConfig, credentials: &CredentialsConfig, http: Client) -> Self {
        Self {
            api_key: credentials.quotes_api_key.clone(),
            api_key_b64: credentials.quotes_api_key_b64.clone(),
            quotes_url: upstream.quotes_url.clone(),
            http,
        }
    }

    /// Fetch exactly one quote.
    ///
    /// A non-200 upstream answer mirrors its status and carries the raw
    /// response text; an empty quote list maps to `NotFound`.
    pub async fn fetch_one(&self) -> GatewayResult<Quote> {
        let api_key = self.resolve_api_key()?;

        let response = self
            .http
            .get(&self.quotes_url)
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let quotes: Vec<QuotePayload> = response.json().await?;
        let first = quotes
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::NotFound("No quotes found".to_string()))?;

        Ok(Quote {
            text: first.quote.unwrap_or_default(),
            author: first.author.unwrap_or_else(|| "Unknown".to_string()),
            category: first.category,
        })
    }

    /// Resolve the provider credential: a plain key wins, otherwise the
    /// base64-encoded variant is decoded.
    fn resolve_api_key(&self) -> GatewayResult<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }

        let encoded = self.api_key_b64.as_deref().ok_or_else(|| {
            GatewayError::Configuration("Quotes API key not configured".to_string())
        })?;

        let decoded = BASE64.decode(encoded).map_err(|e| {
            GatewayError::Configuration(format!("Invalid base64 quotes API key: {}", e))
        })?;

        String::from_utf8(decoded).map_err(|e| {
            GatewayError::Configuration(format!("Invalid base64 quotes API key: {}", e))
        })
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct QuotePayload {
    quote: Option<String>,
    author: Option<String>,
    category: Option<String>,
}
