//! The shared battle view: every character and monster, regardless of owner.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::models::{characters::CharacterResponse, monsters::MonsterResponse};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BattleResponse {
    pub characters: Vec<CharacterResponse>,
    pub monsters: Vec<MonsterResponse>,
}
