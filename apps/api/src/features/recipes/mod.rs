use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod repo;
pub mod routes;
pub mod service;

pub fn router() -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/add", post(routes::add))
        .route("/all", get(routes::all))
        .route("/get/:id", get(routes::get))
        .route("/update", put(routes::update))
        .route("/delete/:id", delete(routes::delete))
}
