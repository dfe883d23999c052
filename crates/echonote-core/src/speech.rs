//! Speech-capture contract shared between core and the desktop bridge.
//!
//! The recognizer itself lives in the desktop crate (it drives the webview's
//! speech API); this module owns the configuration handed to it and the shape
//! of the data it reports back.

/// Spoken language the recognizer listens for by default.
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Fixed recognizer configuration for a capture session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// BCP 47 language tag, e.g. `pt-BR`.
    pub language: String,
    /// Keep recognizing after each final result.
    pub continuous: bool,
    /// Deliver interim (not yet final) results.
    pub interim_results: bool,
    /// Number of alternatives requested per result; only the best is read.
    pub max_alternatives: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

impl RecognizerConfig {
    /// Same configuration with a different spoken language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// One poll's worth of recognizer output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureUpdate {
    /// Best-alternative transcript of every result recognized so far.
    pub segments: Vec<String>,
    /// Recognition errors raised since the previous poll. Non-fatal.
    pub errors: Vec<String>,
}

impl CaptureUpdate {
    /// Whether the recognizer has produced any output yet.
    #[must_use]
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }

    /// The cumulative transcript represented by this update.
    #[must_use]
    pub fn transcript(&self) -> String {
        assemble_transcript(&self.segments)
    }
}

/// Concatenate result segments into the full transcript so far.
///
/// The recognizer reports one segment per recognized result; the transcript
/// is their plain concatenation, no separators inserted.
#[must_use]
pub fn assemble_transcript(segments: &[String]) -> String {
    segments.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_matches_capture_contract() {
        let config = RecognizerConfig::default();
        assert_eq!(config.language, "pt-BR");
        assert!(config.continuous);
        assert!(config.interim_results);
        assert_eq!(config.max_alternatives, 1);
    }

    #[test]
    fn with_language_overrides_only_the_language() {
        let config = RecognizerConfig::default().with_language("en-US");
        assert_eq!(config.language, "en-US");
        assert!(config.continuous);
    }

    #[test]
    fn assemble_transcript_concatenates_segments_in_order() {
        let segments = vec!["buy ".to_string(), "milk ".to_string(), "today".to_string()];
        assert_eq!(assemble_transcript(&segments), "buy milk today");
        assert_eq!(assemble_transcript(&[]), "");
    }

    #[test]
    fn capture_update_transcript_uses_all_segments() {
        let update = CaptureUpdate {
            segments: vec!["a".to_string(), "b".to_string()],
            errors: vec!["no-speech".to_string()],
        };
        assert!(update.has_segments());
        assert_eq!(update.transcript(), "ab");
    }
}
