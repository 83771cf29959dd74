use crate::{docs, AppState};
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

pub mod recipes;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/recipeapi", recipes::router())
        .merge(docs::router(docs::ApiDoc::openapi()))
        .layer(cors)
        .layer(Extension(state))
}
