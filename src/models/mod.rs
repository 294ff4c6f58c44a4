mod health;
mod phase;
mod recommendation;
mod request;

pub use health::HealthStatus;
pub use phase::PipelinePhase;
pub use recommendation::{RecommendResponse, Recommendation};
pub use request::{RecommendFilters, RecommendRequest, MAX_RESULTS, MIN_RESULTS};
