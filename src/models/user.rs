use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Usuário (coleção `users`); só lemos `_id` e `token`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub token: String,
}
