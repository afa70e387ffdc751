use crate::models::dto::response::ScoreResult;

/// Exact-match scoring of submitted answers against the answer key.
/// A length mismatch is a defined degenerate result, not a failure.
pub fn score(submitted: &[i64], correct: &[i64]) -> ScoreResult {
    if submitted.len() != correct.len() {
        return ScoreResult {
            score: 0,
            total: 0,
            error: Some("Length mismatch".to_string()),
        };
    }

    let matches = submitted
        .iter()
        .zip(correct.iter())
        .filter(|(a, b)| a == b)
        .count();

    ScoreResult {
        score: matches,
        total: correct.len(),
        error: None,
    }
}
