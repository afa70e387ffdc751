use serde_json::Value;

/// Normalizes a parsed quiz reply into the guaranteed response contract.
///
/// Accepts either `{"questions": [...]}` or a bare array (models sometimes
/// omit the wrapper object). The only guarantee made on each question is
/// index-bounds safety: an out-of-range `correct_index` is repaired to 0
/// rather than failing the whole generation request. Everything else in the
/// question passes through untouched.
pub fn normalize(raw: Value) -> Vec<Value> {
    let questions = match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    questions
        .into_iter()
        .map(|mut question| {
            repair_correct_index(&mut question);
            question
        })
        .collect()
}

fn repair_correct_index(question: &mut Value) {
    let Some(obj) = question.as_object_mut() else {
        return;
    };

    let option_count = obj
        .get("options")
        .and_then(Value::as_array)
        .map(|opts| opts.len() as i64)
        .unwrap_or(0);

    let index = obj.get("correct_index").and_then(Value::as_i64);

    let in_range = matches!(index, Some(i) if i >= 0 && i < option_count);
    if !in_range {
        log::warn!(
            "repairing out-of-range correct_index {:?} (options={}) to 0",
            obj.get("correct_index"),
            option_count
        );
        obj.insert("correct_index".to_string(), Value::from(0));
    }
}
