//! Database models for monsters.

use crate::api::models::monsters::{MonsterCreate, MonsterUpdate};
use crate::db::handlers::repository::OwnedRecord;
use crate::types::{MonsterId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct MonsterCreateDBRequest {
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
    pub created_by: UserId,
}

impl MonsterCreateDBRequest {
    pub fn new(created_by: UserId, api: MonsterCreate) -> Self {
        Self {
            name: api.name,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
            armor_class: api.armor_class,
            description: api.description,
            created_by,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonsterUpdateDBRequest {
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
}

impl From<MonsterUpdate> for MonsterUpdateDBRequest {
    fn from(api: MonsterUpdate) -> Self {
        Self {
            name: api.name,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
            armor_class: api.armor_class,
            description: api.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonsterDBResponse {
    pub id: MonsterId,
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for MonsterDBResponse {
    fn owner(&self) -> UserId {
        self.created_by
    }
}
