use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::recipes::routes::home,
        crate::features::recipes::routes::add,
        crate::features::recipes::routes::all,
        crate::features::recipes::routes::get,
        crate::features::recipes::routes::update,
        crate::features::recipes::routes::delete,
    ),
    components(
        schemas(
            recipe_types::Recipe,
        )
    ),
    tags(
        (name = "Recipes", description = "Recipe CRUD operations."),
    )
)]
pub struct ApiDoc;

pub fn router(openapi: OpenApiDoc) -> Router {
    let spec = openapi.clone();
    Router::new()
        .route(
            "/docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
}
