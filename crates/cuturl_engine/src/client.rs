use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use cuturl_core::ShortenResult;
use cuturl_logging::{cut_debug, cut_warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ShortenError;

pub const DEFAULT_API_URL: &str = "https://api.tinyurl.com/create";
pub const DEFAULT_DOMAIN: &str = "tinyurl.com";
const DEFAULT_DESCRIPTION: &str = "Created by CutURL";

/// Produces the RFC 3339 timestamp stamped on new results.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct ClientSettings {
    pub api_url: String,
    /// Bearer token. Requests are refused locally when this is missing.
    pub api_token: Option<String>,
    pub domain: String,
    pub description: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            domain: DEFAULT_DOMAIN.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("domain", &self.domain)
            .field("description", &self.description)
            .finish()
    }
}

#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    /// Asks the remote service for a short URL. `original_url` must already be validated.
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError>;
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    url: &'a str,
    domain: &'a str,
    description: &'a str,
}

#[derive(Deserialize)]
struct CreateResponse {
    data: CreatedLink,
}

#[derive(Deserialize)]
struct CreatedLink {
    tiny_url: String,
    alias: String,
}

pub struct TinyUrlClient {
    settings: ClientSettings,
    clock: Clock,
}

impl TinyUrlClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings,
            clock: Arc::new(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn token(&self) -> Result<&str, ShortenError> {
        self.settings
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ShortenError::Configuration)
    }

    fn build_client(&self) -> Result<reqwest::Client, ShortenError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| ShortenError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Shortener for TinyUrlClient {
    async fn shorten(&self, original_url: &str) -> Result<ShortenResult, ShortenError> {
        let token = self.token()?;
        let client = self.build_client()?;

        let response = client
            .post(&self.settings.api_url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json")
            .json(&CreateRequest {
                url: original_url,
                domain: &self.settings.domain,
                description: &self.settings.description,
            })
            .send()
            .await
            .map_err(|err| ShortenError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ShortenError::Network(err.to_string()))?;

        if !status.is_success() {
            cut_warn!("Shortening service returned {}: {}", status, body);
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| {
                    format!("Shortening service error (HTTP {})", status.as_u16())
                });
            return Err(ShortenError::RemoteService(message));
        }

        let created: CreateResponse = serde_json::from_str(&body)
            .map_err(|err| ShortenError::InvalidResponse(err.to_string()))?;
        cut_debug!("Shortened {} to {}", original_url, created.data.tiny_url);

        Ok(ShortenResult {
            id: uuid::Uuid::new_v4().to_string(),
            original_url: original_url.to_string(),
            short_url: created.data.tiny_url,
            short_code: created.data.alias,
            created_at: (self.clock)(),
        })
    }
}

/// Picks a human-readable message out of an error payload's `errors` field.
fn error_message(body: &Value) -> Option<String> {
    let errors = body.get("errors")?;
    let first = match errors {
        Value::Array(items) => items.first()?,
        other => other,
    };
    let message = match first {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    };
    message.filter(|text| !text.trim().is_empty())
}
