use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::BookmarkStore;
use crate::models::{Bookmark, Recipe, User};
use crate::utils::AppError;

/// In-process store used by handler tests
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    recipes: Mutex<Vec<Recipe>>,
    bookmarks: Mutex<Vec<Bookmark>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, token: &str) -> ObjectId {
        let id = ObjectId::new();
        self.users.lock().unwrap().push(User {
            id,
            token: token.to_string(),
        });
        id
    }

    pub fn add_recipe(&self, recipe: Recipe) {
        self.recipes.lock().unwrap().push(recipe);
    }

    pub fn remove_recipe(&self, id: &ObjectId) {
        self.recipes.lock().unwrap().retain(|r| r.id != *id);
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.token == token).cloned())
    }

    async fn insert_bookmark(&self, mut bookmark: Bookmark) -> Result<Bookmark, AppError> {
        bookmark.id = Some(ObjectId::new());
        self.bookmarks.lock().unwrap().push(bookmark.clone());
        Ok(bookmark)
    }

    async fn find_bookmarks_by_user(&self, user_id: &ObjectId) -> Result<Vec<Bookmark>, AppError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks.iter().filter(|b| b.id_user == *user_id).cloned().collect())
    }

    async fn find_recipes_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Recipe>, AppError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().filter(|r| ids.contains(&r.id)).cloned().collect())
    }

    async fn delete_bookmark(&self, user_id: &ObjectId, recipe_id: &ObjectId) -> Result<u64, AppError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        match bookmarks
            .iter()
            .position(|b| b.id_user == *user_id && b.id_recipe == *recipe_id)
        {
            Some(index) => {
                bookmarks.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an unreachable server would
pub struct FailingStore;

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn find_user_by_token(&self, _token: &str) -> Result<Option<User>, AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }

    async fn insert_bookmark(&self, _bookmark: Bookmark) -> Result<Bookmark, AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }

    async fn find_bookmarks_by_user(&self, _user_id: &ObjectId) -> Result<Vec<Bookmark>, AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }

    async fn find_recipes_by_ids(&self, _ids: &[ObjectId]) -> Result<Vec<Recipe>, AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }

    async fn delete_bookmark(&self, _user_id: &ObjectId, _recipe_id: &ObjectId) -> Result<u64, AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Database("server selection timeout".to_string()))
    }
}
