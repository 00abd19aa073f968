use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CatsError, Result};
use crate::query::{GetByIdOptions, QueryPairs, RandomCatOptions, SearchOptions, SimilarOptions};
use crate::types::{CatInfo, ImageData, SearchResult, Theme};

/// Production origin of the AI Cats API.
pub const DEFAULT_ENDPOINT: &str = "https://api.ai-cats.net/v1";

fn normalize(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

#[derive(Deserialize)]
struct ThemesResponse {
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: String,
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

/// Async client for the AI Cats image generation and search API.
///
/// Every method is an independent stateless request; the client is `Clone`
/// and can be shared freely across tasks. No timeout or retry is applied
/// by this layer — supply a configured `reqwest::Client` via
/// [`with_http_client`](CatsClient::with_http_client) if you need either.
///
/// # Example
/// ```no_run
/// use ai_cats::CatsClient;
///
/// # async fn example() -> ai_cats::Result<()> {
/// let client = CatsClient::new();
/// let total = client.count(None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatsClient {
    http: Client,
    endpoint: String,
}

impl Default for CatsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatsClient {
    /// Create a client pointing at the production API.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different origin (staging, local mock).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = normalize(endpoint.into());
        self
    }

    /// Use a custom `reqwest::Client` (for connection pooling, timeouts, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // ── Images ──────────────────────────────────────────────────────

    /// Fetch a random cat image, shaped per `opts.response_type`.
    ///
    /// Every call carries a fresh `rnd` token, so repeat calls with the
    /// same options still bypass intermediary caches and return different
    /// images.
    pub async fn random(&self, opts: &RandomCatOptions) -> Result<ImageData> {
        let url = self.url("/cat", &opts.query_pairs())?;
        let bytes = self.fetch_bytes(url, "fetching cat image").await?;
        Ok(ImageData::shape(bytes, opts.response_type.unwrap_or_default()))
    }

    /// Fetch a specific cat image by id. The size defaults to 1024.
    pub async fn by_id(&self, id: &str, opts: &GetByIdOptions) -> Result<ImageData> {
        let url = self.url(&format!("/cat/{id}"), &opts.query_pairs())?;
        let bytes = self.fetch_bytes(url, "fetching cat image").await?;
        Ok(ImageData::shape(bytes, opts.response_type.unwrap_or_default()))
    }

    // ── Metadata ────────────────────────────────────────────────────

    /// Fetch descriptive metadata for one image.
    pub async fn info(&self, id: &str) -> Result<CatInfo> {
        let url = self.url(&format!("/cat/info/{id}"), &[])?;
        self.fetch_json(url, "fetching cat info").await
    }

    /// Search the catalog. Unset options are left to server defaults.
    pub async fn search(&self, opts: &SearchOptions) -> Result<Vec<SearchResult>> {
        let url = self.url("/cat/search", &opts.query_pairs())?;
        self.fetch_json(url, "searching for cats").await
    }

    /// List images similar to the one with the given id.
    pub async fn similar(&self, id: &str, opts: &SimilarOptions) -> Result<Vec<SearchResult>> {
        let url = self.url(&format!("/cat/similar/{id}"), &opts.query_pairs())?;
        self.fetch_json(url, "fetching similar cats").await
    }

    /// Suggest a completion for a partial search query.
    ///
    /// Takes the same options as [`search`](CatsClient::search).
    pub async fn search_completion(&self, opts: &SearchOptions) -> Result<String> {
        let url = self.url("/cat/search-completion", &opts.query_pairs())?;
        let body: CompletionResponse = self
            .fetch_json(url, "fetching search completion")
            .await?;
        Ok(body.completion)
    }

    /// List the themes the API can generate.
    pub async fn themes(&self) -> Result<Vec<Theme>> {
        let url = self.url("/cat/theme-list", &[])?;
        let body: ThemesResponse = self.fetch_json(url, "fetching theme list").await?;
        Ok(body.themes)
    }

    /// Total number of images in the catalog, optionally per theme.
    pub async fn count(&self, theme: Option<Theme>) -> Result<u64> {
        let pairs: QueryPairs = match theme {
            Some(t) => vec![("theme", t.as_str().to_string())],
            None => Vec::new(),
        };
        let url = self.url("/cat/count", &pairs)?;
        let body: CountResponse = self.fetch_json(url, "counting cats").await?;
        Ok(body.count)
    }

    // ── Request plumbing ────────────────────────────────────────────

    fn url(&self, path: &str, pairs: &[(&'static str, String)]) -> Result<Url> {
        let base = format!("{}{}", self.endpoint, path);
        let parsed = if pairs.is_empty() {
            Url::parse(&base)
        } else {
            Url::parse_with_params(&base, pairs.iter().map(|(k, v)| (*k, v.as_str())))
        };
        parsed.map_err(|e| CatsError::InvalidResponse(format!("bad request URL {base}: {e}")))
    }

    async fn get(&self, url: Url, context: &'static str) -> Result<reqwest::Response> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatsError::Network { context, source: e })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatsError::RequestFailed {
                context,
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }
        Ok(resp)
    }

    async fn fetch_bytes(&self, url: Url, context: &'static str) -> Result<Vec<u8>> {
        let resp = self.get(url, context).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CatsError::Network { context, source: e })?;
        Ok(bytes.to_vec())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url, context: &'static str) -> Result<T> {
        let resp = self.get(url, context).await?;
        resp.json()
            .await
            .map_err(|e| CatsError::Network { context, source: e })
    }
}
