use axum::Json;
use formcheck_core::models::ApiMessage;

/// GET / — service banner, doubles as a reachability check.
pub async fn root() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Api Content".to_string(),
    })
}
