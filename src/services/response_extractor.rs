use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// Returns an unstructured reply as trimmed text, unchanged.
pub fn extract_text(reply: &str) -> String {
    reply.trim().to_string()
}

/// Recovers a JSON value from a model reply that may be wrapped in
/// markdown code fences. Every literal "```json" and "```" token is
/// stripped before parsing; models routinely fence their output even
/// when told not to.
pub fn extract_structured(reply: &str) -> AppResult<Value> {
    let cleaned = reply.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    serde_json::from_str(cleaned).map_err(|e| {
        log::error!("failed to parse structured model reply: {} raw={:?}", e, reply);
        AppError::MalformedReply(format!("model did not return valid JSON: {}", e))
    })
}
