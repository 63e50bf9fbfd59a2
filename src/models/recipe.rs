use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Receita (coleção `recipes`), acessada apenas pelo join de favoritos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub picture: String,

    #[serde(default)]
    pub pregnant: bool,

    #[serde(default)]
    pub healthy: bool,

    #[serde(rename = "muscleGain", default)]
    pub muscle_gain: bool,

    #[serde(rename = "glutenFree", default)]
    pub gluten_free: bool,

    #[serde(default)]
    pub vegetarian: bool,
}
