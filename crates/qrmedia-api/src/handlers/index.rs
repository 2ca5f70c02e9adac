use axum::response::Html;

/// Landing page with the upload form, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
