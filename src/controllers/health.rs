use axum::{http::StatusCode, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Service is running", body = String))
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
