//! API request/response models for shops.

use crate::db::models::shops::ShopDBResponse;
use crate::types::{ShopId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ShopCreate {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    /// In-world shopkeeper name, free text
    #[validate(length(min = 1, max = 40))]
    pub owner_name: String,
    pub inventory: String,
}

/// Full-overwrite update payload; every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ShopUpdate {
    #[validate(length(min = 1, max = 40))]
    pub name: String,
    #[validate(length(min = 1, max = 40))]
    pub owner_name: String,
    pub inventory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShopResponse {
    #[schema(value_type = uuid::Uuid)]
    pub id: ShopId,
    pub name: String,
    pub owner_name: String,
    pub inventory: String,
    #[schema(value_type = uuid::Uuid)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShopDBResponse> for ShopResponse {
    fn from(db: ShopDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            owner_name: db.owner_name,
            inventory: db.inventory,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
