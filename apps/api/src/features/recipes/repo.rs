use recipe_types::Recipe;
use sqlx::PgPool;

#[derive(sqlx::FromRow)]
struct RecipeRow {
    recipe_id: i32,
    recipe_name: String,
    ingredients: String,
    instructions: String,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            recipe_id: row.recipe_id,
            name: row.recipe_name,
            ingredients: row.ingredients,
            instructions: row.instructions,
        }
    }
}

/// Upsert keyed on the caller-supplied id: saving an existing id overwrites
/// all three text columns.
pub async fn save(db: &PgPool, recipe: &Recipe) -> sqlx::Result<Recipe> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        INSERT INTO recipe_table (recipe_id, recipe_name, ingredients, instructions)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (recipe_id) DO UPDATE
        SET recipe_name = EXCLUDED.recipe_name,
            ingredients = EXCLUDED.ingredients,
            instructions = EXCLUDED.instructions
        RETURNING *
        "#,
    )
    .bind(recipe.recipe_id)
    .bind(&recipe.name)
    .bind(&recipe.ingredients)
    .bind(&recipe.instructions)
    .fetch_one(db)
    .await?;

    Ok(row.into())
}

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Recipe>> {
    let rows = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT recipe_id, recipe_name, ingredients, instructions
        FROM recipe_table
        ORDER BY recipe_id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Recipe::from).collect())
}

pub async fn get(db: &PgPool, id: i32) -> sqlx::Result<Option<Recipe>> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        SELECT recipe_id, recipe_name, ingredients, instructions
        FROM recipe_table
        WHERE recipe_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(Recipe::from))
}

/// Replace-if-exists in a single statement so there is no window between the
/// existence check and the write. `None` means the id was absent and nothing
/// was written.
pub async fn replace(db: &PgPool, recipe: &Recipe) -> sqlx::Result<Option<Recipe>> {
    let row = sqlx::query_as::<_, RecipeRow>(
        r#"
        UPDATE recipe_table
        SET recipe_name = $2,
            ingredients = $3,
            instructions = $4
        WHERE recipe_id = $1
        RETURNING *
        "#,
    )
    .bind(recipe.recipe_id)
    .bind(&recipe.name)
    .bind(&recipe.ingredients)
    .bind(&recipe.instructions)
    .fetch_optional(db)
    .await?;

    Ok(row.map(Recipe::from))
}

/// Returns `false` when the id was absent.
pub async fn delete(db: &PgPool, id: i32) -> sqlx::Result<bool> {
    let deleted: Option<(i32,)> = sqlx::query_as(
        r#"
        DELETE FROM recipe_table
        WHERE recipe_id = $1
        RETURNING recipe_id
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(deleted.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_types::Recipe;

    fn tea() -> Recipe {
        Recipe {
            recipe_id: 1,
            name: "Tea".into(),
            ingredients: "Water, Tea leaves".into(),
            instructions: "Boil and steep".into(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn save_overwrites_on_existing_id(pool: PgPool) -> sqlx::Result<()> {
        save(&pool, &tea()).await?;

        let mut second = tea();
        second.name = "Green Tea".into();
        let saved = save(&pool, &second).await?;
        assert_eq!(saved, second);

        // Still a single row.
        assert_eq!(list(&pool).await?.len(), 1);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn replace_missing_id_writes_nothing(pool: PgPool) -> sqlx::Result<()> {
        let replaced = replace(&pool, &tea()).await?;
        assert!(replaced.is_none());
        assert!(list(&pool).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn delete_reports_absence(pool: PgPool) -> sqlx::Result<()> {
        assert!(!delete(&pool, 999).await?);

        save(&pool, &tea()).await?;
        assert!(delete(&pool, 1).await?);
        assert!(get(&pool, 1).await?.is_none());
        Ok(())
    }
}
