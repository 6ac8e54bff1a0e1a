//! Database models for shops.

use crate::api::models::shops::{ShopCreate, ShopUpdate};
use crate::db::handlers::repository::OwnedRecord;
use crate::types::{ShopId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ShopCreateDBRequest {
    pub name: String,
    /// Display name of the in-world shopkeeper, free text
    pub owner_name: String,
    pub inventory: String,
    pub created_by: UserId,
}

impl ShopCreateDBRequest {
    pub fn new(created_by: UserId, api: ShopCreate) -> Self {
        Self {
            name: api.name,
            owner_name: api.owner_name,
            inventory: api.inventory,
            created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopUpdateDBRequest {
    pub name: String,
    pub owner_name: String,
    pub inventory: String,
}

impl From<ShopUpdate> for ShopUpdateDBRequest {
    fn from(api: ShopUpdate) -> Self {
        Self {
            name: api.name,
            owner_name: api.owner_name,
            inventory: api.inventory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopDBResponse {
    pub id: ShopId,
    pub name: String,
    pub owner_name: String,
    pub inventory: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for ShopDBResponse {
    fn owner(&self) -> UserId {
        self.created_by
    }
}
