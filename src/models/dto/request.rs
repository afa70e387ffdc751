use serde::Deserialize;

/// User-supplied study notes. Content is forwarded to the model verbatim;
/// an empty string is permitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckAnswersRequest {
    pub answers: Vec<i64>,
    pub correct_answers: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeakTopicsRequest {
    pub weak_topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_request_deserializes() {
        let request: NotesRequest = serde_json::from_str(r#"{"text": "some notes"}"#).unwrap();
        assert_eq!(request.text, "some notes");
    }

    #[test]
    fn test_check_answers_request_deserializes() {
        let request: CheckAnswersRequest =
            serde_json::from_str(r#"{"answers": [0, 1], "correct_answers": [0, 2]}"#).unwrap();
        assert_eq!(request.answers, vec![0, 1]);
        assert_eq!(request.correct_answers, vec![0, 2]);
    }

    #[test]
    fn test_weak_topics_request_deserializes() {
        let request: WeakTopicsRequest =
            serde_json::from_str(r#"{"weak_topics": ["Osmosis"]}"#).unwrap();
        assert_eq!(request.weak_topics, vec!["Osmosis".to_string()]);
    }
}
