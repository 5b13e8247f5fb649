use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET / - Upload form
pub async fn homepage() -> Html<&'static str> {
    Html(INDEX_HTML)
}
