//! HTTP client for the ScraperAPI service.

use crate::error::{Result, ScraperApiError};
use crate::request::{
    MarketplaceQueryRequest, PageFetchRequest, ResponseDecoding, ScrapeRequest,
    SearchQueryRequest,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;
use zdk_core::{SCRAPERAPI_API_KEY_ENV, ZConfig};

/// Default base URL of the ScraperAPI service
pub const DEFAULT_BASE_URL: &str = "https://api.scraperapi.com";

/// Default request timeout; rendered pages can take a while on the remote side
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(70);

/// ScraperAPI key. Neither `Debug` nor `Display` prints the secret.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ScraperApiError::Configuration(
                "ScraperAPI key is empty".to_string(),
            ));
        }
        Ok(Self(key))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutput {
    /// HTML, text, markdown or CSV, exactly as returned by the service
    Text(String),
    /// Parsed JSON payload
    Json(Value),
}

impl ScrapeOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScrapeOutput::Text(text) => Some(text),
            ScrapeOutput::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ScrapeOutput::Json(value) => Some(value),
            ScrapeOutput::Text(_) => None,
        }
    }

    /// Body as text; JSON payloads are re-serialized
    pub fn into_text(self) -> String {
        match self {
            ScrapeOutput::Text(text) => text,
            ScrapeOutput::Json(value) => value.to_string(),
        }
    }

    /// Body as a JSON value; text becomes a JSON string
    pub fn into_value(self) -> Value {
        match self {
            ScrapeOutput::Text(text) => Value::String(text),
            ScrapeOutput::Json(value) => value,
        }
    }
}

/// Client translating typed requests into ScraperAPI calls.
///
/// Holds the API key, the base URL and a pooled `reqwest::Client`. All state is
/// immutable after construction, so one client can be shared behind an `Arc`
/// by every tool.
///
/// # Example
///
/// ```rust,no_run
/// use zdk_scraperapi::{MarketplaceQueryRequest, ScraperApiClient};
///
/// # async fn example() -> zdk_scraperapi::Result<()> {
/// let client = ScraperApiClient::from_env()?;
/// let results = client
///     .amazon_search(MarketplaceQueryRequest::new("green shoes"))
///     .await?;
/// println!("{:?}", results.as_json());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScraperApiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: Url,
}

impl ScraperApiClient {
    /// Create a client with an explicit API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_http_client(DEFAULT_TIMEOUT)?,
            api_key: ApiKey::new(api_key)?,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Create a client with the key read from `SCRAPERAPI_API_KEY`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(SCRAPERAPI_API_KEY_ENV).map_err(|_| {
            ScraperApiError::Configuration(format!(
                "Did not find the ScraperAPI key. Set the {} environment variable",
                SCRAPERAPI_API_KEY_ENV
            ))
        })?;
        Self::new(key)
    }

    /// Create a client from the `[scraperapi]` section of a loaded configuration
    pub fn from_config(config: &ZConfig) -> Result<Self> {
        let key = config
            .scraperapi_api_key()
            .map_err(|e| ScraperApiError::Configuration(e.to_string()))?;

        Ok(Self {
            http: build_http_client(Duration::from_secs(config.scraperapi.timeout_secs))?,
            api_key: ApiKey::new(key)?,
            base_url: parse_base_url(&config.scraperapi.base_url)?,
        })
    }

    /// Point the client at a different service root (proxies, test servers)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Validate a request and build the outbound HTTP request without sending it.
    pub fn build_request(&self, request: &ScrapeRequest) -> Result<reqwest::Request> {
        request.validate()?;

        let url = self.base_url.join(request.endpoint()).map_err(|e| {
            ScraperApiError::Configuration(format!("Invalid endpoint URL: {}", e))
        })?;

        let http_request = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.expose())])
            .query(&request.query_params())
            .build()?;

        Ok(http_request)
    }

    /// Send one request and decode the response according to its output format.
    #[instrument(skip(self, request), fields(operation = request.operation()))]
    pub async fn execute(&self, request: ScrapeRequest) -> Result<ScrapeOutput> {
        let http_request = self.build_request(&request)?;

        // Names only, values can carry user data
        let param_names: Vec<&str> = request
            .query_params()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        debug!(
            endpoint = request.endpoint(),
            params = ?param_names,
            "Sending ScraperAPI request"
        );

        let response = self.http.execute(http_request).await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "ScraperAPI response received");

        if !status.is_success() {
            warn!(status = status.as_u16(), "ScraperAPI request failed");
            return Err(ScraperApiError::RemoteService {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
                body,
            });
        }

        match request.decoding() {
            ResponseDecoding::Text => Ok(ScrapeOutput::Text(body)),
            ResponseDecoding::Json => match serde_json::from_str::<Value>(&body) {
                Ok(value) => Ok(ScrapeOutput::Json(value)),
                Err(e) => {
                    warn!(error = %e, "ScraperAPI returned malformed JSON");
                    Err(ScraperApiError::RemoteService {
                        status: status.as_u16(),
                        reason: format!("malformed JSON payload: {}", e),
                        body,
                    })
                }
            },
        }
    }

    /// Fetch a web page. Returns HTML, or text/markdown rendered by the service.
    pub async fn scrape(&self, request: PageFetchRequest) -> Result<String> {
        self.execute(request.into()).await.map(ScrapeOutput::into_text)
    }

    /// Run a Google search through the structured endpoint
    pub async fn google_search(&self, request: SearchQueryRequest) -> Result<ScrapeOutput> {
        self.execute(request.into()).await
    }

    /// Run an Amazon product search through the structured endpoint
    pub async fn amazon_search(&self, request: MarketplaceQueryRequest) -> Result<ScrapeOutput> {
        self.execute(request.into()).await
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("zdk-scraperapi/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| {
        ScraperApiError::Configuration(format!("Invalid base URL '{}': {}", base_url, e))
    })?;

    // Endpoints are joined relative to the base, which needs a trailing slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
