//! Webview speech-to-text bridge.
//!
//! Drives the webview's `SpeechRecognition` / `webkitSpeechRecognition` API
//! from Rust via `document::eval`. Exactly one recognizer handle exists per
//! page load, held in a JS global (`window.__echonoteSpeech`) and shared by
//! every creation card; starting while one is already live aborts it and
//! starts fresh (last start wins).
//!
//! The recognizer accumulates the best-alternative transcript of every result
//! on the JS side; [`poll_speech_capture`] reads the current segment list and
//! drains pending recognition errors. Snapshots are cumulative, so callers
//! overwrite, never append.

use dioxus::document;
use serde::Deserialize;

use echonote_core::speech::{CaptureUpdate, RecognizerConfig};
use echonote_core::{Error, Result};

const AVAILABILITY_SCRIPT: &str = r#"
(() => {
    return {
        ok: true,
        available: "SpeechRecognition" in window || "webkitSpeechRecognition" in window,
    };
})()
"#;

const START_SCRIPT_TEMPLATE: &str = r#"
(() => {
    const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
    if (!Recognition) {
        return { ok: false, unavailable: true };
    }

    const previous = window.__echonoteSpeech;
    if (previous && previous.recognizer) {
        try {
            previous.recognizer.onresult = null;
            previous.recognizer.onerror = null;
            previous.recognizer.abort();
        } catch (_) {
            // Already stopped.
        }
        window.__echonoteSpeech = null;
    }

    try {
        const recognizer = new Recognition();
        recognizer.lang = __LANG__;
        recognizer.continuous = __CONTINUOUS__;
        recognizer.interimResults = __INTERIM__;
        recognizer.maxAlternatives = __MAX_ALTERNATIVES__;

        const session = { recognizer, segments: [], errors: [] };

        recognizer.onresult = (event) => {
            const segments = [];
            for (const result of event.results) {
                segments.push(result[0].transcript);
            }
            session.segments = segments;
        };

        recognizer.onerror = (event) => {
            session.errors.push(event.error ? String(event.error) : "unknown");
        };

        recognizer.start();
        window.__echonoteSpeech = session;
        return { ok: true };
    } catch (error) {
        return {
            ok: false,
            error: error && error.message ? error.message : String(error),
        };
    }
})()
"#;

const STOP_SCRIPT: &str = r#"
(() => {
    const session = window.__echonoteSpeech;
    if (!session || !session.recognizer) {
        return { ok: true };
    }

    try {
        session.recognizer.stop();
        return { ok: true };
    } catch (error) {
        return {
            ok: false,
            error: error && error.message ? error.message : String(error),
        };
    }
})()
"#;

const POLL_SCRIPT: &str = r#"
(() => {
    const session = window.__echonoteSpeech;
    if (!session) {
        return { ok: true, segments: [], errors: [] };
    }

    const errors = session.errors.splice(0, session.errors.length);
    return { ok: true, segments: session.segments.slice(), errors };
})()
"#;

#[derive(Debug, Deserialize)]
struct BridgeResult {
    ok: bool,
    #[serde(default)]
    unavailable: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AvailabilityResult {
    ok: bool,
    #[serde(default)]
    available: bool,
}

#[derive(Debug, Deserialize)]
struct PollResult {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    segments: Vec<String>,
    #[serde(default)]
    errors: Vec<String>,
}

/// Check at call time whether the webview supports speech recognition.
///
/// A runtime without the capability answers `false`; the probe never throws.
pub async fn speech_capture_available() -> bool {
    let probe: std::result::Result<AvailabilityResult, _> =
        document::eval(AVAILABILITY_SCRIPT).join().await;
    match probe {
        Ok(result) => result.ok && result.available,
        Err(error) => {
            tracing::debug!("Speech capability probe failed: {}", error);
            false
        }
    }
}

/// Configure and start the shared recognizer.
pub async fn start_speech_capture(config: &RecognizerConfig) -> Result<()> {
    let script = build_start_script(config);
    let result: BridgeResult = document::eval(&script)
        .join()
        .await
        .map_err(|error| Error::SpeechCapture(format!("failed to start recognizer: {error}")))?;
    parse_bridge_result(result)
}

/// Stop the shared recognizer. Succeeds when none is active.
pub async fn stop_speech_capture() -> Result<()> {
    let result: BridgeResult = document::eval(STOP_SCRIPT)
        .join()
        .await
        .map_err(|error| Error::SpeechCapture(format!("failed to stop recognizer: {error}")))?;
    parse_bridge_result(result)
}

/// Read the recognizer's current output and drain pending errors.
pub async fn poll_speech_capture() -> Result<CaptureUpdate> {
    let result: PollResult = document::eval(POLL_SCRIPT)
        .join()
        .await
        .map_err(|error| Error::SpeechCapture(format!("failed to poll recognizer: {error}")))?;
    parse_poll_result(result)
}

fn build_start_script(config: &RecognizerConfig) -> String {
    // serde_json produces a quoted, escaped JS string literal for the tag.
    let language = serde_json::to_string(&config.language)
        .unwrap_or_else(|_| format!("\"{}\"", echonote_core::speech::DEFAULT_LANGUAGE));

    START_SCRIPT_TEMPLATE
        .replace("__LANG__", &language)
        .replace("__CONTINUOUS__", bool_literal(config.continuous))
        .replace("__INTERIM__", bool_literal(config.interim_results))
        .replace("__MAX_ALTERNATIVES__", &config.max_alternatives.to_string())
}

const fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn parse_bridge_result(result: BridgeResult) -> Result<()> {
    if result.ok {
        Ok(())
    } else if result.unavailable {
        Err(Error::SpeechUnavailable)
    } else {
        Err(Error::SpeechCapture(result.error.unwrap_or_else(|| {
            "speech capture operation failed".to_string()
        })))
    }
}

fn parse_poll_result(result: PollResult) -> Result<CaptureUpdate> {
    if !result.ok {
        return Err(Error::SpeechCapture(result.error.unwrap_or_else(|| {
            "recognizer poll returned no payload".to_string()
        })));
    }

    Ok(CaptureUpdate {
        segments: result.segments,
        errors: result.errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_script_embeds_configuration() {
        let config = RecognizerConfig::default().with_language("en-GB");
        let script = build_start_script(&config);

        assert!(script.contains("recognizer.lang = \"en-GB\";"));
        assert!(script.contains("recognizer.continuous = true;"));
        assert!(script.contains("recognizer.interimResults = true;"));
        assert!(script.contains("recognizer.maxAlternatives = 1;"));
    }

    #[test]
    fn start_script_escapes_language_tag() {
        let config = RecognizerConfig::default().with_language("pt-\"BR\"");
        let script = build_start_script(&config);

        assert!(script.contains(r#"recognizer.lang = "pt-\"BR\"";"#));
    }

    #[test]
    fn parse_bridge_result_maps_failure_to_error() {
        assert!(parse_bridge_result(BridgeResult {
            ok: true,
            unavailable: false,
            error: None
        })
        .is_ok());

        let error = parse_bridge_result(BridgeResult {
            ok: false,
            unavailable: false,
            error: Some("not-allowed".to_string()),
        })
        .unwrap_err();
        assert!(error.to_string().contains("not-allowed"));
    }

    #[test]
    fn parse_bridge_result_recognizes_missing_capability() {
        let payload: BridgeResult =
            serde_json::from_str(r#"{ "ok": false, "unavailable": true }"#).unwrap();
        assert!(matches!(
            parse_bridge_result(payload),
            Err(Error::SpeechUnavailable)
        ));
    }

    #[test]
    fn parse_poll_result_preserves_segment_order() {
        let payload: PollResult = serde_json::from_str(
            r#"{ "ok": true, "segments": ["a", "ab"], "errors": ["no-speech"] }"#,
        )
        .unwrap();

        let update = parse_poll_result(payload).unwrap();
        assert_eq!(update.segments, vec!["a".to_string(), "ab".to_string()]);
        assert_eq!(update.errors, vec!["no-speech".to_string()]);
    }

    #[test]
    fn parse_poll_result_tolerates_missing_fields() {
        let payload: PollResult = serde_json::from_str(r#"{ "ok": true }"#).unwrap();
        let update = parse_poll_result(payload).unwrap();
        assert!(!update.has_segments());
        assert!(update.errors.is_empty());
    }

    #[test]
    fn parse_poll_result_rejects_failed_poll() {
        let payload: PollResult =
            serde_json::from_str(r#"{ "ok": false, "error": "gone" }"#).unwrap();
        assert!(parse_poll_result(payload).is_err());
    }
}
