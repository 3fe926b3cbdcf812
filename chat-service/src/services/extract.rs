//! Locates the text payload inside a loosely-structured generation result.

use serde_json::Value;

/// Returned when the result cannot even be re-serialized for the fallback.
const UNRENDERABLE: &str = "[unrenderable generation result]";

/// Known locations of the text payload, probed in priority order. The
/// `response`-wrapped shapes come from SDK-style results; the bare
/// `candidates` shape is the raw REST body.
const TEXT_PATHS: [&str; 3] = [
    "/response/candidates/0/content/parts/0/text",
    "/candidates/0/content/parts/0/text",
    "/response/candidates/0/content/text",
];

/// Extract the human-readable text from a generation result.
///
/// Total: a result matching none of the known shapes degrades to its
/// pretty-printed JSON serialization instead of an error. A value present at
/// a probe path but not a string counts as absent.
pub fn extract_text(result: &Value) -> String {
    for path in TEXT_PATHS {
        if let Some(text) = result.pointer(path).and_then(Value::as_str) {
            return text.to_string();
        }
    }

    tracing::warn!("generation result matched no known text shape, returning raw dump");
    match serde_json::to_string_pretty(result) {
        Ok(dump) => dump,
        Err(e) => {
            tracing::error!("failed to serialize generation result: {}", e);
            UNRENDERABLE.to_string()
        }
    }
}
