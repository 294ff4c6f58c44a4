use serde::{Deserialize, Serialize};

/// One ranked film as emitted by the `recommendations` event.
///
/// The base fields are always present; the enrichment fields depend on which
/// upstream sources answered and default to `None`/empty when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub poster_url: Option<String>,
    /// Why the ranker picked this film
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub trailer_embed_url: Option<String>,
    #[serde(default)]
    pub trailer_thumbnail: Option<String>,
    #[serde(default)]
    pub imdb_rating: Option<f64>,
    /// Tomatometer percentage
    #[serde(default)]
    pub rotten_tomatoes: Option<i32>,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Option<String>,
    #[serde(default)]
    pub trivia: Option<Vec<String>>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
}

impl Recommendation {
    /// "Title (Year)", or just the title when the year is unknown
    pub fn display_title(&self) -> String {
        if self.year > 0 {
            format!("{} ({})", self.title, self.year)
        } else {
            self.title.clone()
        }
    }
}

/// Response of the non-streaming `POST /api/recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub session_id: String,
    pub narrative: String,
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub processing_time_ms: u64,
}
