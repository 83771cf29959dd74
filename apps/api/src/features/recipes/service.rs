use crate::AppState;
use anyhow::{Context, Result};
use recipe_types::Recipe;
use tracing::info;

/// Store a recipe under its caller-supplied id. An existing id is
/// overwritten (the store's save is an upsert).
pub async fn add_recipe(st: &AppState, recipe: Recipe) -> Result<Recipe> {
    info!(recipe_id = recipe.recipe_id, name = %recipe.name, "adding recipe");
    super::repo::save(&st.db, &recipe)
        .await
        .context("failed to save recipe")
}

pub async fn get_all_recipes(st: &AppState) -> Result<Vec<Recipe>> {
    super::repo::list(&st.db)
        .await
        .context("failed to list recipes")
}

pub async fn get_recipe_by_id(st: &AppState, id: i32) -> Result<Option<Recipe>> {
    super::repo::get(&st.db, id)
        .await
        .context("failed to fetch recipe")
}

/// Full replacement keyed by the id embedded in the payload. `Ok(None)`
/// means the id did not exist; nothing is created in that case.
pub async fn update_recipe(st: &AppState, recipe: Recipe) -> Result<Option<Recipe>> {
    info!(recipe_id = recipe.recipe_id, "updating recipe");
    super::repo::replace(&st.db, &recipe)
        .await
        .context("failed to update recipe")
}

/// `Ok(false)` means the id did not exist.
pub async fn delete_recipe_by_id(st: &AppState, id: i32) -> Result<bool> {
    info!(recipe_id = id, "deleting recipe");
    super::repo::delete(&st.db, id)
        .await
        .context("failed to delete recipe")
}
