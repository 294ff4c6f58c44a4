use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of the recommendation pipeline reported by `status` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PipelinePhase {
    Extracting,
    Searching,
    Enriching,
    Ranking,
    Narrating,
    /// A phase this client does not know about yet
    Other(String),
}

impl PipelinePhase {
    pub fn as_str(&self) -> &str {
        match self {
            PipelinePhase::Extracting => "extracting",
            PipelinePhase::Searching => "searching",
            PipelinePhase::Enriching => "enriching",
            PipelinePhase::Ranking => "ranking",
            PipelinePhase::Narrating => "narrating",
            PipelinePhase::Other(name) => name,
        }
    }

    /// Short progress label for display
    pub fn label(&self) -> String {
        match self {
            PipelinePhase::Extracting => "Understanding your request".to_string(),
            PipelinePhase::Searching => "Searching films".to_string(),
            PipelinePhase::Enriching => "Gathering details".to_string(),
            PipelinePhase::Ranking => "Ranking candidates".to_string(),
            PipelinePhase::Narrating => "Writing recommendations".to_string(),
            PipelinePhase::Other(name) => name.clone(),
        }
    }
}

impl From<String> for PipelinePhase {
    fn from(name: String) -> Self {
        match name.as_str() {
            "extracting" => PipelinePhase::Extracting,
            "searching" => PipelinePhase::Searching,
            "enriching" => PipelinePhase::Enriching,
            "ranking" => PipelinePhase::Ranking,
            "narrating" => PipelinePhase::Narrating,
            _ => PipelinePhase::Other(name),
        }
    }
}

impl From<PipelinePhase> for String {
    fn from(phase: PipelinePhase) -> Self {
        phase.as_str().to_string()
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_phases() {
        for name in ["extracting", "searching", "enriching", "ranking", "narrating"] {
            let phase = PipelinePhase::from(name.to_string());
            assert!(!matches!(phase, PipelinePhase::Other(_)), "{}", name);
            assert_eq!(phase.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_phase_is_preserved() {
        let phase: PipelinePhase = serde_json::from_str(r#""translating""#).unwrap();
        assert_eq!(phase, PipelinePhase::Other("translating".to_string()));
        assert_eq!(serde_json::to_string(&phase).unwrap(), r#""translating""#);
    }
}
