use std::sync::Arc;

use axum::{
    extract::{FromRequest, State},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ApiError;
use crate::types::{NewSavedRecipe, SavedRecipe};
use crate::AppState;

/// JSON body whose rejections (bad content type, bad syntax, wrong shapes)
/// answer like every other save failure: 500 with an `error` message.
#[derive(FromRequest, Deserialize)]
#[from_request(via(Json), rejection(ApiError))]
pub struct SaveBody(pub NewSavedRecipe);

/// `POST /saveRecipe`: persist one recipe into the collection.
pub async fn save_recipe_handler(
    State(state): State<Arc<AppState>>,
    SaveBody(payload): SaveBody,
) -> Result<Json<&'static str>, ApiError> {
    let id = state.store.save(&payload).await.map_err(|e| {
        error!("Failed to save recipe {:?}: {e}", payload.name);
        e
    })?;
    info!("Saved recipe {:?} as {id}", payload.name);
    Ok(Json("Success"))
}

/// `GET /savedRecipes`: the whole collection, insertion order.
pub async fn saved_recipes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavedRecipe>>, ApiError> {
    let recipes = state.store.list_all().await.map_err(|e| {
        error!("Failed to list saved recipes: {e}");
        e
    })?;
    Ok(Json(recipes))
}
