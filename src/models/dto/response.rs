use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevisionResponse {
    pub revision_text: String,
}

/// Outcome of exact-match answer scoring. `error` is only present for the
/// defined length-mismatch degenerate case.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
