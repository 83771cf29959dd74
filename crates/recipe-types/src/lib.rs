use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single recipe record. The id is supplied by the caller and acts as the
/// primary key; it is never generated server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_id: i32,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}
