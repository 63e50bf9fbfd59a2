use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Recipe;
use crate::utils::validation::{empty_if_null, validate_object_id};

/// Favorito: "usuário U salvou a receita R" (coleção `bookmarks`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub id_user: ObjectId,

    pub id_recipe: ObjectId,
}

impl Bookmark {
    pub fn new(id_user: ObjectId, id_recipe: ObjectId) -> Self {
        Bookmark {
            id: None,
            id_user,
            id_recipe,
        }
    }
}

/// Body of POST / and DELETE /
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
pub struct BookmarkRequest {
    #[serde(default, deserialize_with = "empty_if_null")]
    #[validate(length(min = 1, message = "token is required."))]
    pub token: String,

    #[serde(default, deserialize_with = "empty_if_null")]
    #[validate(
        length(min = 1, message = "recipe_id is required."),
        custom = "validate_object_id"
    )]
    pub recipe_id: String,
}

impl BookmarkRequest {
    pub const FIELDS: &'static [&'static str] = &["token", "recipe_id"];
}

/// Path of GET /{token} and GET /infos/{token}
#[derive(Debug, Clone, Deserialize, Validate, utoipa::IntoParams)]
#[into_params(parameter_in = Path)]
pub struct TokenPath {
    /// Opaque user token
    #[validate(length(min = 1, message = "token is required."))]
    pub token: String,
}

impl TokenPath {
    pub const FIELDS: &'static [&'static str] = &["token"];
}

/// Raw bookmark as returned by GET /{token}
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct BookmarkResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub id_user: String,
    pub id_recipe: String,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        BookmarkResponse {
            id: bookmark.id.map(|id| id.to_hex()).unwrap_or_default(),
            id_user: bookmark.id_user.to_hex(),
            id_recipe: bookmark.id_recipe.to_hex(),
        }
    }
}

/// Flattened bookmark + recipe item returned by GET /infos/{token}
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct BookmarkDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub id_user: String,
    pub id_recipe: String,
    pub recipe_name: String,
    pub recipe_picture: String,
    pub pregnant: bool,
    pub healthy: bool,
    #[serde(rename = "muscleGain")]
    pub muscle_gain: bool,
    #[serde(rename = "glutenFree")]
    pub gluten_free: bool,
    pub vegetarian: bool,
}

impl BookmarkDetails {
    pub fn from_parts(bookmark: &Bookmark, recipe: &Recipe) -> Self {
        BookmarkDetails {
            id: bookmark.id.map(|id| id.to_hex()).unwrap_or_default(),
            id_user: bookmark.id_user.to_hex(),
            id_recipe: recipe.id.to_hex(),
            recipe_name: recipe.name.clone(),
            recipe_picture: recipe.picture.clone(),
            pregnant: recipe.pregnant,
            healthy: recipe.healthy,
            muscle_gain: recipe.muscle_gain,
            gluten_free: recipe.gluten_free,
            vegetarian: recipe.vegetarian,
        }
    }
}
