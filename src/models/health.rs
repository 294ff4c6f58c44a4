use serde::{Deserialize, Serialize};

/// Response of `GET /api/health`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    /// "ok" or "degraded"
    pub status: String,
    /// LLM backend state ("ok", "unknown" or "error: ...")
    #[serde(default)]
    pub vllm: Option<String>,
    /// Film database state
    #[serde(default)]
    pub tmdb: Option<String>,
    /// Streaming implementation in use
    #[serde(default)]
    pub streaming: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_health() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status":"degraded","vllm":"error: timeout","tmdb":"ok","tmdb_genres":19}"#,
        )
        .unwrap();
        assert!(!health.is_ok());
        assert_eq!(health.vllm.as_deref(), Some("error: timeout"));
        assert_eq!(health.streaming, None);
    }
}
