use crate::pages;
use axum::response::Html;

pub async fn home_handler() -> Html<String> {
    Html(pages::home())
}
