use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use recipe_types::Recipe;
use tracing::error;

#[utoipa::path(
    get,
    path = "/recipeapi/",
    responses(
        (status = 200, description = "Service banner", body = String),
    ),
    tag = "Recipes"
)]
pub async fn home() -> &'static str {
    "Recipe Book API"
}

#[utoipa::path(
    post,
    path = "/recipeapi/add",
    request_body = Recipe,
    responses(
        (status = 201, description = "Recipe stored", body = Recipe),
        (status = 500, description = "Failed to store the recipe"),
    ),
    tag = "Recipes"
)]
pub async fn add(
    Extension(st): Extension<AppState>,
    Json(recipe): Json<Recipe>,
) -> Result<(StatusCode, Json<Recipe>), (StatusCode, String)> {
    let saved = super::service::add_recipe(&st, recipe).await.map_err(|err| {
        error!(?err, "failed to add recipe");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error adding recipe: {err:#}"),
        )
    })?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/recipeapi/all",
    responses(
        (status = 200, description = "All recipes", body = [Recipe]),
        (status = 500, description = "Failed to list recipes"),
    ),
    tag = "Recipes"
)]
pub async fn all(
    Extension(st): Extension<AppState>,
) -> Result<Json<Vec<Recipe>>, (StatusCode, String)> {
    let recipes = super::service::get_all_recipes(&st).await.map_err(|err| {
        error!(?err, "failed to list recipes");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching recipes: {err:#}"),
        )
    })?;
    Ok(Json(recipes))
}

#[utoipa::path(
    get,
    path = "/recipeapi/get/{id}",
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "No recipe with that id"),
    ),
    tag = "Recipes"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Recipe>, (StatusCode, String)> {
    let recipe = super::service::get_recipe_by_id(&st, id)
        .await
        .map_err(|err| {
            error!(?err, recipe_id = id, "failed to fetch recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching recipe: {err:#}"),
            )
        })?;

    match recipe {
        Some(recipe) => Ok(Json(recipe)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("Recipe with ID {id} not found."),
        )),
    }
}

#[utoipa::path(
    put,
    path = "/recipeapi/update",
    request_body = Recipe,
    responses(
        (status = 200, description = "Recipe replaced", body = Recipe),
        (status = 404, description = "No recipe with that id"),
    ),
    tag = "Recipes"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Json(recipe): Json<Recipe>,
) -> Result<Json<Recipe>, (StatusCode, String)> {
    let id = recipe.recipe_id;
    let updated = super::service::update_recipe(&st, recipe)
        .await
        .map_err(|err| {
            error!(?err, recipe_id = id, "failed to update recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error updating recipe: {err:#}"),
            )
        })?;

    match updated {
        Some(recipe) => Ok(Json(recipe)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("Cannot update. Recipe with ID {id} not found."),
        )),
    }
}

#[utoipa::path(
    delete,
    path = "/recipeapi/delete/{id}",
    params(("id" = i32, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe deleted"),
        (status = 404, description = "No recipe with that id"),
    ),
    tag = "Recipes"
)]
pub async fn delete(
    Extension(st): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<String, (StatusCode, String)> {
    let deleted = super::service::delete_recipe_by_id(&st, id)
        .await
        .map_err(|err| {
            error!(?err, recipe_id = id, "failed to delete recipe");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error deleting recipe: {err:#}"),
            )
        })?;

    if deleted {
        Ok(format!("Recipe with ID {id} deleted successfully."))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            format!("Cannot delete. Recipe with ID {id} not found."),
        ))
    }
}
