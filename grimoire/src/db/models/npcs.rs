//! Database models for non-player characters.

use crate::api::models::npcs::{NpcCreate, NpcUpdate};
use crate::db::handlers::repository::OwnedRecord;
use crate::types::{NpcId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct NpcCreateDBRequest {
    pub name: String,
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub created_by: UserId,
}

impl NpcCreateDBRequest {
    pub fn new(created_by: UserId, api: NpcCreate) -> Self {
        Self {
            name: api.name,
            job: api.job,
            description: api.description,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
            created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NpcUpdateDBRequest {
    pub name: String,
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
}

impl From<NpcUpdate> for NpcUpdateDBRequest {
    fn from(api: NpcUpdate) -> Self {
        Self {
            name: api.name,
            job: api.job,
            description: api.description,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NpcDBResponse {
    pub id: NpcId,
    pub name: String,
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for NpcDBResponse {
    fn owner(&self) -> UserId {
        self.created_by
    }
}
