pub mod store;
#[cfg(test)]
pub mod memory;

pub use store::BookmarkStore;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection, Database, IndexModel};

use crate::models::{Bookmark, Recipe, User};
use crate::utils::AppError;

pub const USERS: &str = "users";
pub const RECIPES: &str = "recipes";
pub const BOOKMARKS: &str = "bookmarks";

const DEFAULT_DATABASE: &str = "recipes";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        // Database name comes from the URI path, e.g. mongodb://host/recipes
        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;
        log::info!("📦 Using database: {}", db_name);

        let mongodb = Self { db };
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Index failures are logged and never abort startup.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let indexes: [(&str, Document, &str); 3] = [
            (BOOKMARKS, doc! { "id_user": 1 }, "bookmarks(id_user)"),
            (BOOKMARKS, doc! { "id_user": 1, "id_recipe": 1 }, "bookmarks(id_user, id_recipe)"),
            (USERS, doc! { "token": 1 }, "users(token)"),
        ];

        for (collection, keys, label) in indexes {
            let index = IndexModel::builder().keys(keys).build();

            match self.collection::<Document>(collection).create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: {}", label),
                Err(e) => log::debug!("   ℹ️  Index not created for {}: {}", label, e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[async_trait]
impl BookmarkStore for MongoDB {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection::<User>(USERS)
            .find_one(doc! { "token": token })
            .await?;
        Ok(user)
    }

    async fn insert_bookmark(&self, mut bookmark: Bookmark) -> Result<Bookmark, AppError> {
        let result = self
            .collection::<Bookmark>(BOOKMARKS)
            .insert_one(&bookmark)
            .await?;
        bookmark.id = result.inserted_id.as_object_id();
        Ok(bookmark)
    }

    async fn find_bookmarks_by_user(&self, user_id: &ObjectId) -> Result<Vec<Bookmark>, AppError> {
        let cursor = self
            .collection::<Bookmark>(BOOKMARKS)
            .find(doc! { "id_user": *user_id })
            .await?;
        let bookmarks: Vec<Bookmark> = cursor.try_collect().await?;
        Ok(bookmarks)
    }

    async fn find_recipes_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Recipe>, AppError> {
        let cursor = self
            .collection::<Recipe>(RECIPES)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        let recipes: Vec<Recipe> = cursor.try_collect().await?;
        Ok(recipes)
    }

    async fn delete_bookmark(&self, user_id: &ObjectId, recipe_id: &ObjectId) -> Result<u64, AppError> {
        let result = self
            .collection::<Bookmark>(BOOKMARKS)
            .delete_one(doc! { "id_user": *user_id, "id_recipe": *recipe_id })
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_roundtrip() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/recipes_test".to_string());

        let db = MongoDB::new(&uri).await.unwrap();
        db.ping().await.unwrap();

        let user_id = ObjectId::new();
        let recipe_id = ObjectId::new();
        let saved = db.insert_bookmark(Bookmark::new(user_id, recipe_id)).await.unwrap();
        assert!(saved.id.is_some());

        let found = db.find_bookmarks_by_user(&user_id).await.unwrap();
        assert_eq!(found.len(), 1);

        assert_eq!(db.delete_bookmark(&user_id, &recipe_id).await.unwrap(), 1);
        assert_eq!(db.delete_bookmark(&user_id, &recipe_id).await.unwrap(), 0);
    }
}
