//! Runtime configuration for the desktop client.

use echonote_core::speech::{RecognizerConfig, DEFAULT_LANGUAGE};

const ENV_SPEECH_LANGUAGE: &str = "ECHONOTE_SPEECH_LANG";

/// Resolve the recognizer configuration at call time.
///
/// The spoken language can be overridden with `ECHONOTE_SPEECH_LANG`.
pub fn recognizer_config() -> RecognizerConfig {
    let language = resolve_language(std::env::var(ENV_SPEECH_LANGUAGE).ok());
    RecognizerConfig::default().with_language(language)
}

fn resolve_language(value: Option<String>) -> String {
    value
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_language_defaults_when_unset_or_blank() {
        assert_eq!(resolve_language(None), "pt-BR");
        assert_eq!(resolve_language(Some("   ".to_string())), "pt-BR");
    }

    #[test]
    fn resolve_language_trims_override() {
        assert_eq!(resolve_language(Some(" en-US ".to_string())), "en-US");
    }
}
