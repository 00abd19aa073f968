use rand::Rng;

use crate::types::{ResponseType, Size, Theme};

/// Ordered key/value pairs for a request's query string.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

fn push_opt(pairs: &mut QueryPairs, key: &'static str, value: Option<String>) {
    if let Some(v) = value {
        pairs.push((key, v));
    }
}

/// Fresh cache-busting token. The random endpoint appends this on every
/// call so identical option sets still produce distinct URLs, defeating
/// intermediary HTTP caches.
fn cache_buster() -> String {
    rand::rng().random_range(0..u64::MAX).to_string()
}

/// Options for [`CatsClient::random`](crate::CatsClient::random).
///
/// Unset fields are omitted from the request so the server defaults apply.
///
/// # Example
/// ```
/// use ai_cats::{RandomCatOptions, Size, Theme};
///
/// let opts = RandomCatOptions::new()
///     .size(Size::S512)
///     .theme(Theme::Halloween);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomCatOptions {
    pub size: Option<Size>,
    pub theme: Option<Theme>,
    pub response_type: Option<ResponseType>,
}

impl RandomCatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific image size.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Restrict the image to a visual theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Select the output shape (default: blob).
    pub fn response_type(mut self, kind: ResponseType) -> Self {
        self.response_type = Some(kind);
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "size", self.size.map(|s| s.as_str().to_string()));
        push_opt(&mut pairs, "theme", self.theme.map(|t| t.as_str().to_string()));
        pairs.push(("rnd", cache_buster()));
        pairs
    }
}

/// Options for [`CatsClient::by_id`](crate::CatsClient::by_id).
///
/// Unlike the other bundles, an unset `size` does not fall through to the
/// server: the client fills in the largest size (`"1024"`).
#[derive(Debug, Clone, Default)]
pub struct GetByIdOptions {
    pub size: Option<Size>,
    pub response_type: Option<ResponseType>,
}

impl GetByIdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific image size (default: 1024).
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Select the output shape (default: blob).
    pub fn response_type(mut self, kind: ResponseType) -> Self {
        self.response_type = Some(kind);
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let size = self.size.unwrap_or_default();
        vec![("size", size.as_str().to_string())]
    }
}

/// Options for [`CatsClient::search`](crate::CatsClient::search) and
/// [`CatsClient::search_completion`](crate::CatsClient::search_completion)
/// (both endpoints take the same parameter set).
///
/// # Example
/// ```
/// use ai_cats::{SearchOptions, Theme};
///
/// let opts = SearchOptions::new()
///     .query("orange tabby")
///     .limit(10)
///     .descending(true)
///     .theme(Theme::Winter);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: Option<String>,
    pub limit: Option<u32>,
    /// Pagination cursor: the id where the next page should begin.
    pub from: Option<String>,
    /// When false (the default) no `descending` parameter is sent.
    pub descending: bool,
    pub theme: Option<Theme>,
    pub size: Option<Size>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume a paged search from this result id.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sort newest-first.
    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Restrict results to a visual theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Size for the returned image links.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "query", self.query.clone());
        push_opt(&mut pairs, "limit", self.limit.map(|l| l.to_string()));
        push_opt(&mut pairs, "from", self.from.clone());
        if self.descending {
            pairs.push(("descending", "true".to_string()));
        }
        push_opt(&mut pairs, "theme", self.theme.map(|t| t.as_str().to_string()));
        push_opt(&mut pairs, "size", self.size.map(|s| s.as_str().to_string()));
        pairs
    }
}

/// Options for [`CatsClient::similar`](crate::CatsClient::similar).
#[derive(Debug, Clone, Default)]
pub struct SimilarOptions {
    pub limit: Option<u32>,
    pub size: Option<Size>,
}

impl SimilarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Size for the returned image links.
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub(crate) fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "limit", self.limit.map(|l| l.to_string()));
        push_opt(&mut pairs, "size", self.size.map(|s| s.as_str().to_string()));
        pairs
    }
}
