use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::{pages, templates, SITE_STYLES};
use crate::AppState;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/styles/site.css", get(styles))
        .route("/recipes", get(pages::recipes::recipes_index))
        .route("/recipes/{id}", get(pages::recipes::recipe_get))
        .route("/random", get(pages::recipes::random_recipe))
        .route("/authors", get(pages::authors::authors_index))
        .route("/authors/{id}", get(pages::authors::author_get))
        .route("/categories", get(pages::categories::categories_index))
        .route("/categories/{id}", get(pages::categories::category_get))
        .fallback(fallback)
}

async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], SITE_STYLES)
}

async fn fallback() -> Response {
    (StatusCode::NOT_FOUND, templates::not_found()).into_response()
}
