use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

/// Pass-through proxy for the public joke API. No transformation, the
/// upstream JSON body is returned as-is.
#[get("/joke")]
pub async fn get_joke(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.http.get(&state.config.joke_api_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::BackendError(format!(
            "joke API returned {}",
            status
        )));
    }

    let joke: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::BackendError(format!("unexpected joke API body: {}", e)))?;

    Ok(HttpResponse::Ok().json(joke))
}
