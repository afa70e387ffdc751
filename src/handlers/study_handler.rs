use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CheckAnswersRequest, NotesRequest, WeakTopicsRequest},
        response::{RevisionResponse, SummaryResponse},
    },
    services::{answer_scorer, prompt_builder, quiz_validator, response_extractor},
};

#[post("/summarize")]
pub async fn summarize(
    state: web::Data<AppState>,
    request: web::Json<NotesRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompt_builder::summary_prompt(&request.text);
    let reply = state.completion.complete(&prompt, false).await?;

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: response_extractor::extract_text(&reply),
    }))
}

#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<NotesRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompt_builder::quiz_prompt(&request.text);
    let reply = state.completion.complete(&prompt, true).await?;
    let parsed = response_extractor::extract_structured(&reply)?;

    // Flattened array, not the {"questions": ...} wrapper.
    let quiz = quiz_validator::normalize(parsed);
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/check-answers")]
pub async fn check_answers(request: web::Json<CheckAnswersRequest>) -> HttpResponse {
    let result = answer_scorer::score(&request.answers, &request.correct_answers);
    HttpResponse::Ok().json(result)
}

#[post("/quick-revision")]
pub async fn quick_revision(
    state: web::Data<AppState>,
    request: web::Json<NotesRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompt_builder::quick_revision_prompt(&request.text);
    let reply = state.completion.complete(&prompt, true).await?;

    // Shape is requested of the model but not validated beyond the parse.
    let sheet = response_extractor::extract_structured(&reply)?;
    Ok(HttpResponse::Ok().json(sheet))
}

#[post("/weak-topic-revision")]
pub async fn weak_topic_revision(
    state: web::Data<AppState>,
    request: web::Json<WeakTopicsRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = prompt_builder::weak_topic_prompt(&request.weak_topics);
    let reply = state.completion.complete(&prompt, false).await?;

    Ok(HttpResponse::Ok().json(RevisionResponse {
        revision_text: response_extractor::extract_text(&reply),
    }))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::model_client::MockCompletionClient;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn state_with_mock(mock: MockCompletionClient) -> AppState {
        AppState::with_completion_client(Config::from_env(), Arc::new(mock))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_summarize_returns_trimmed_model_text() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .withf(|prompt, structured| prompt.contains("photosynthesis") && !structured)
            .returning(|_, _| Ok("  A plant process.  ".to_string()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_mock(mock)))
                .service(summarize),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(serde_json::json!({ "text": "photosynthesis notes" }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["summary"], "A plant process.");
    }

    #[actix_web::test]
    async fn test_generate_quiz_requests_structured_output() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .withf(|_, structured| *structured)
            .returning(|_, _| Ok(r#"{"questions": []}"#.to_string()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with_mock(mock)))
                .service(generate_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate-quiz")
            .set_json(serde_json::json!({ "text": "notes" }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_check_answers_has_no_model_dependency() {
        let app = test::init_service(App::new().service(check_answers)).await;

        let req = test::TestRequest::post()
            .uri("/check-answers")
            .set_json(serde_json::json!({ "answers": [0, 1, 2], "correct_answers": [0, 1, 1] }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["score"], 2);
        assert_eq!(body["total"], 3);
    }
}
