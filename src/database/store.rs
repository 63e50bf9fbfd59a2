use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{Bookmark, Recipe, User};
use crate::utils::AppError;

/// Everything the bookmark handlers need from persistence.
///
/// Each call is one independent round-trip; nothing here is transactional.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// Returns the stored bookmark with its assigned `_id`.
    async fn insert_bookmark(&self, bookmark: Bookmark) -> Result<Bookmark, AppError>;

    /// Natural (insertion) order, no sort applied.
    async fn find_bookmarks_by_user(&self, user_id: &ObjectId) -> Result<Vec<Bookmark>, AppError>;

    async fn find_recipes_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Recipe>, AppError>;

    /// Removes at most one matching bookmark and returns how many were removed.
    async fn delete_bookmark(&self, user_id: &ObjectId, recipe_id: &ObjectId) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
