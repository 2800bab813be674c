//! Typed parameter sets for the three ScraperAPI operations and their
//! translation into query parameters.
//!
//! Optional fields are `Option<T>`; a `None` (or a blank string) never reaches
//! the wire. The API key is not part of these types, the client adds it.

use crate::error::{Result, ScraperApiError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query parameters in the order they are sent
pub type QueryParams = Vec<(&'static str, String)>;

/// Response shape of the page fetch endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageOutputFormat {
    #[default]
    Raw,
    Text,
    Markdown,
}

impl PageOutputFormat {
    /// Value of the `output_format` parameter; raw HTML is the service default
    fn wire_value(self) -> Option<&'static str> {
        match self {
            PageOutputFormat::Raw => None,
            PageOutputFormat::Text => Some("text"),
            PageOutputFormat::Markdown => Some("markdown"),
        }
    }
}

/// Response shape of the structured search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StructuredOutputFormat {
    #[default]
    Json,
    Csv,
}

impl StructuredOutputFormat {
    fn wire_value(self) -> &'static str {
        match self {
            StructuredOutputFormat::Json => "json",
            StructuredOutputFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
}

impl DeviceType {
    fn wire_value(self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
        }
    }
}

/// How a response body is handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDecoding {
    /// Body returned verbatim (HTML, text, markdown, CSV)
    Text,
    /// Body parsed as JSON
    Json,
}

/// Parameters for fetching a single web page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PageFetchRequest {
    /// The URL of the webpage to scrape
    pub url: String,

    /// The output format, can be 'text' or 'markdown'. If not specified, returns HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<PageOutputFormat>,

    /// The country code to use for the request (e.g., 'us', 'uk', 'ca')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The device type to use for the request, can be 'desktop' or 'mobile'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<DeviceType>,

    /// Whether to use premium proxies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,

    /// Whether to render JavaScript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<bool>,

    /// Whether to keep headers in the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_headers: Option<bool>,
}

impl PageFetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ScraperApiError::validation("url", "must not be empty"));
        }
        url::Url::parse(url).map_err(|e| {
            ScraperApiError::validation("url", format!("'{}' is not a valid URL: {}", url, e))
        })?;
        Ok(())
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = vec![("url", self.url.clone())];
        push_opt(
            &mut params,
            "output_format",
            self.output_format.and_then(PageOutputFormat::wire_value),
        );
        push_str(&mut params, "country_code", self.country_code.as_deref());
        push_opt(
            &mut params,
            "device_type",
            self.device_type.map(DeviceType::wire_value),
        );
        push_opt(&mut params, "premium", self.premium);
        push_opt(&mut params, "render", self.render);
        push_opt(&mut params, "keep_headers", self.keep_headers);
        params
    }
}

/// Parameters for a Google search through the structured endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchQueryRequest {
    /// Query keywords that a user wants to search for e.g. 'Pizza recipe'
    pub query: String,

    /// The output format, can be 'json' or 'csv'. Defaults to 'json'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<StructuredOutputFormat>,

    /// Two letter country code for Geo Targeting (e.g. 'us', 'uk', 'ca')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Country of Google domain to scrape (e.g. 'com', 'co.uk', 'ca'). Defaults to 'com'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld: Option<String>,

    /// Set a region for a search (e.g., 'w+CAIQICINUGFyaXMsIEZyYW5jZQ')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uule: Option<String>,

    /// Number of results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,

    /// Host Language (e.g., 'DE')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hl: Option<String>,

    /// Boosts matches whose country of origin matches the parameter value (e.g., 'DE')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gl: Option<String>,

    /// Character encoding for the query string (e.g., 'UTF8')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie: Option<String>,

    /// Character encoding for the results (e.g., 'UTF8')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oe: Option<String>,

    /// Set the starting offset in the result list (e.g., 10 for page 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}

impl SearchQueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_query(&self.query)
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = vec![("query", self.query.clone())];
        push_str(&mut params, "country_code", self.country_code.as_deref());
        push_str(&mut params, "tld", self.tld.as_deref());
        push_opt(
            &mut params,
            "output_format",
            self.output_format.map(StructuredOutputFormat::wire_value),
        );
        push_str(&mut params, "uule", self.uule.as_deref());
        push_opt(&mut params, "num", self.num);
        push_str(&mut params, "hl", self.hl.as_deref());
        push_str(&mut params, "gl", self.gl.as_deref());
        push_str(&mut params, "ie", self.ie.as_deref());
        push_str(&mut params, "oe", self.oe.as_deref());
        push_opt(&mut params, "start", self.start);
        params
    }
}

/// Parameters for an Amazon product search through the structured endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MarketplaceQueryRequest {
    /// Add a query you want to search e.g. 'green shoes'
    pub query: String,

    /// The output format, can be 'json' or 'csv'. Defaults to 'json'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<StructuredOutputFormat>,

    /// Two letter country code for Geo Targeting (e.g. 'us', 'uk', 'ca')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Amazon market to be scraped (e.g. 'com', 'co.uk', 'ca'). Defaults to 'com'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld: Option<String>,

    /// Paginating the result. For example: 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl MarketplaceQueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_query(&self.query)?;
        if self.page == Some(0) {
            return Err(ScraperApiError::validation("page", "must be 1 or greater"));
        }
        Ok(())
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = vec![("query", self.query.clone())];
        // The Amazon endpoint names its geo-targeting parameter `country`
        push_str(&mut params, "country", self.country_code.as_deref());
        push_str(&mut params, "tld", self.tld.as_deref());
        push_opt(
            &mut params,
            "output_format",
            self.output_format.map(StructuredOutputFormat::wire_value),
        );
        push_opt(&mut params, "page", self.page);
        params
    }
}

/// One outbound ScraperAPI call
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeRequest {
    PageFetch(PageFetchRequest),
    SearchQuery(SearchQueryRequest),
    MarketplaceQuery(MarketplaceQueryRequest),
}

impl ScrapeRequest {
    /// Path relative to the service base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            ScrapeRequest::PageFetch(_) => "",
            ScrapeRequest::SearchQuery(_) => "structured/google/search",
            ScrapeRequest::MarketplaceQuery(_) => "structured/amazon/search",
        }
    }

    /// Short operation label for logs
    pub fn operation(&self) -> &'static str {
        match self {
            ScrapeRequest::PageFetch(_) => "page_fetch",
            ScrapeRequest::SearchQuery(_) => "google_search",
            ScrapeRequest::MarketplaceQuery(_) => "amazon_search",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ScrapeRequest::PageFetch(r) => r.validate(),
            ScrapeRequest::SearchQuery(r) => r.validate(),
            ScrapeRequest::MarketplaceQuery(r) => r.validate(),
        }
    }

    pub fn query_params(&self) -> QueryParams {
        match self {
            ScrapeRequest::PageFetch(r) => r.query_params(),
            ScrapeRequest::SearchQuery(r) => r.query_params(),
            ScrapeRequest::MarketplaceQuery(r) => r.query_params(),
        }
    }

    pub fn decoding(&self) -> ResponseDecoding {
        let structured = match self {
            ScrapeRequest::PageFetch(_) => return ResponseDecoding::Text,
            ScrapeRequest::SearchQuery(r) => r.output_format,
            ScrapeRequest::MarketplaceQuery(r) => r.output_format,
        };
        match structured.unwrap_or_default() {
            StructuredOutputFormat::Json => ResponseDecoding::Json,
            StructuredOutputFormat::Csv => ResponseDecoding::Text,
        }
    }
}

impl From<PageFetchRequest> for ScrapeRequest {
    fn from(request: PageFetchRequest) -> Self {
        ScrapeRequest::PageFetch(request)
    }
}

impl From<SearchQueryRequest> for ScrapeRequest {
    fn from(request: SearchQueryRequest) -> Self {
        ScrapeRequest::SearchQuery(request)
    }
}

impl From<MarketplaceQueryRequest> for ScrapeRequest {
    fn from(request: MarketplaceQueryRequest) -> Self {
        ScrapeRequest::MarketplaceQuery(request)
    }
}

fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(ScraperApiError::validation("query", "must not be empty"));
    }
    Ok(())
}

fn push_opt<T: ToString>(params: &mut QueryParams, name: &'static str, value: Option<T>) {
    if let Some(value) = value {
        params.push((name, value.to_string()));
    }
}

fn push_str(params: &mut QueryParams, name: &'static str, value: Option<&str>) {
    // Blank means absent; anything else is forwarded as given
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        params.push((name, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(params: &QueryParams) -> Vec<&'static str> {
        params.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_page_fetch_minimal_params() {
        let request = PageFetchRequest::new("https://example.com");
        assert_eq!(
            request.query_params(),
            vec![("url", "https://example.com".to_string())]
        );
    }

    #[test]
    fn test_page_fetch_all_params() {
        let request = PageFetchRequest {
            url: "http://example.com".to_string(),
            output_format: Some(PageOutputFormat::Text),
            country_code: Some("us".to_string()),
            device_type: Some(DeviceType::Mobile),
            premium: Some(true),
            render: Some(false),
            keep_headers: Some(true),
        };

        assert_eq!(
            request.query_params(),
            vec![
                ("url", "http://example.com".to_string()),
                ("output_format", "text".to_string()),
                ("country_code", "us".to_string()),
                ("device_type", "mobile".to_string()),
                ("premium", "true".to_string()),
                ("render", "false".to_string()),
                ("keep_headers", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_raw_output_is_not_sent() {
        let request = PageFetchRequest {
            output_format: Some(PageOutputFormat::Raw),
            ..PageFetchRequest::new("https://example.com")
        };
        assert!(!names(&request.query_params()).contains(&"output_format"));
    }

    #[test]
    fn test_blank_strings_are_omitted() {
        let request = SearchQueryRequest {
            country_code: Some("".to_string()),
            hl: Some("   ".to_string()),
            ..SearchQueryRequest::new("pizza")
        };
        assert_eq!(names(&request.query_params()), vec!["query"]);
    }

    #[test]
    fn test_values_forwarded_verbatim() {
        let search = SearchQueryRequest {
            hl: Some(" de".to_string()),
            ..SearchQueryRequest::new("  pizza recipe ")
        };
        search.validate().unwrap();
        assert_eq!(
            search.query_params(),
            vec![
                ("query", "  pizza recipe ".to_string()),
                ("hl", " de".to_string()),
            ]
        );

        let marketplace = MarketplaceQueryRequest::new(" chair");
        assert_eq!(marketplace.query_params()[0], ("query", " chair".to_string()));

        let page = PageFetchRequest::new(" https://example.com ");
        page.validate().unwrap();
        assert_eq!(
            page.query_params(),
            vec![("url", " https://example.com ".to_string())]
        );
    }

    #[test]
    fn test_page_fetch_validation() {
        assert!(PageFetchRequest::new("").validate().unwrap_err().is_validation());
        assert!(PageFetchRequest::new("   ").validate().is_err());
        assert!(PageFetchRequest::new("not a url").validate().is_err());
        assert!(PageFetchRequest::new("https://example.com/path?q=1").validate().is_ok());
    }

    #[test]
    fn test_search_query_params() {
        let request = SearchQueryRequest {
            country_code: Some("de".to_string()),
            tld: Some("de".to_string()),
            output_format: Some(StructuredOutputFormat::Csv),
            num: Some(20),
            hl: Some("DE".to_string()),
            gl: Some("DE".to_string()),
            start: Some(10),
            ..SearchQueryRequest::new("Pizza recipe")
        };

        assert_eq!(
            request.query_params(),
            vec![
                ("query", "Pizza recipe".to_string()),
                ("country_code", "de".to_string()),
                ("tld", "de".to_string()),
                ("output_format", "csv".to_string()),
                ("num", "20".to_string()),
                ("hl", "DE".to_string()),
                ("gl", "DE".to_string()),
                ("start", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_query_rejected() {
        let err = SearchQueryRequest::new("").validate().unwrap_err();
        assert!(matches!(err, ScraperApiError::Validation { field: "query", .. }));

        let err = MarketplaceQueryRequest::new(" ").validate().unwrap_err();
        assert!(matches!(err, ScraperApiError::Validation { field: "query", .. }));
    }

    #[test]
    fn test_marketplace_page_and_country() {
        let request = MarketplaceQueryRequest {
            country_code: Some("uk".to_string()),
            page: Some(2),
            ..MarketplaceQueryRequest::new("chair")
        };

        let params = request.query_params();
        assert!(params.contains(&("page", "2".to_string())));
        assert!(params.contains(&("country", "uk".to_string())));
        assert!(!names(&params).contains(&"country_code"));

        let without_page = MarketplaceQueryRequest::new("chair").query_params();
        assert!(!names(&without_page).contains(&"page"));
    }

    #[test]
    fn test_marketplace_page_zero_rejected() {
        let request = MarketplaceQueryRequest {
            page: Some(0),
            ..MarketplaceQueryRequest::new("chair")
        };
        let err = request.validate().unwrap_err();
        assert!(matches!(err, ScraperApiError::Validation { field: "page", .. }));
    }

    #[test]
    fn test_decoding_follows_output_format() {
        let page: ScrapeRequest = PageFetchRequest::new("https://example.com").into();
        assert_eq!(page.decoding(), ResponseDecoding::Text);

        let search: ScrapeRequest = SearchQueryRequest::new("pizza").into();
        assert_eq!(search.decoding(), ResponseDecoding::Json);

        let csv: ScrapeRequest = MarketplaceQueryRequest {
            output_format: Some(StructuredOutputFormat::Csv),
            ..MarketplaceQueryRequest::new("chair")
        }
        .into();
        assert_eq!(csv.decoding(), ResponseDecoding::Text);
    }

    #[test]
    fn test_endpoints() {
        let search: ScrapeRequest = SearchQueryRequest::new("pizza").into();
        assert_eq!(search.endpoint(), "structured/google/search");

        let amazon: ScrapeRequest = MarketplaceQueryRequest::new("chair").into();
        assert_eq!(amazon.endpoint(), "structured/amazon/search");
        assert_eq!(amazon.operation(), "amazon_search");
    }

    #[test]
    fn test_deserialize_from_tool_arguments() {
        let request: PageFetchRequest = serde_json::from_value(json!({
            "url": "https://example.com",
            "output_format": "markdown",
            "device_type": "desktop",
            "render": true
        }))
        .unwrap();

        assert_eq!(request.output_format, Some(PageOutputFormat::Markdown));
        assert_eq!(request.device_type, Some(DeviceType::Desktop));
        assert_eq!(request.render, Some(true));
        assert_eq!(request.premium, None);

        let bad_format = serde_json::from_value::<SearchQueryRequest>(json!({
            "query": "pizza",
            "output_format": "xml"
        }));
        assert!(bad_format.is_err());
    }
}
