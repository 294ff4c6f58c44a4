//! Narration event parsers (raw text payloads)

use crate::sse::events::StreamEvent;

/// Parse token event. The payload is the fragment itself, whitespace included.
pub(super) fn parse_token_event(data: &str) -> StreamEvent {
    StreamEvent::Token {
        text: data.to_string(),
    }
}

/// Parse narrative_replace event. Outer whitespace is not significant here.
pub(super) fn parse_narrative_replace_event(data: &str) -> StreamEvent {
    StreamEvent::NarrativeReplace {
        text: data.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keeps_whitespace() {
        assert_eq!(
            parse_token_event(" the "),
            StreamEvent::Token {
                text: " the ".to_string()
            }
        );
    }

    #[test]
    fn test_narrative_replace_trims() {
        assert_eq!(
            parse_narrative_replace_event("  Texto corregido.  "),
            StreamEvent::NarrativeReplace {
                text: "Texto corregido.".to_string()
            }
        );
    }
}
