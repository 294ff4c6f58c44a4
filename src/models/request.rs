use serde::{Deserialize, Serialize};

/// Smallest `max_results` the recommendation API accepts
pub const MIN_RESULTS: u8 = 1;
/// Largest `max_results` the recommendation API accepts
pub const MAX_RESULTS: u8 = 10;

/// Optional constraints applied by the search stage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendFilters {
    /// Earliest release year to consider
    #[serde(default)]
    pub min_year: Option<i32>,
    /// Lowest average rating to consider
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl RecommendFilters {
    pub fn is_empty(&self) -> bool {
        self.min_year.is_none() && self.min_rating.is_none()
    }
}

/// Body of `POST /api/recommend` and `POST /api/recommend/stream`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    /// Free-form natural language query
    pub query: String,
    /// Session from a previous turn; None starts a new conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Number of results to return (1..=10)
    pub max_results: u8,
    /// Language tag for narration and metadata (e.g. "es", "en")
    pub language: String,
    #[serde(default)]
    pub filters: RecommendFilters,
}

impl RecommendRequest {
    /// Create a request for a new conversation with default settings
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: None,
            max_results: 3,
            language: "es".to_string(),
            filters: RecommendFilters::default(),
        }
    }

    /// Continue an existing conversation (builder pattern)
    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id.filter(|id| !id.is_empty());
        self
    }

    /// Set the result count, clamped to the accepted range (builder pattern)
    pub fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        self
    }

    /// Set the language tag (builder pattern)
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the search filters (builder pattern)
    pub fn with_filters(mut self, filters: RecommendFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Whether the query has any non-whitespace content
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
