//! API response models for compendium lookups.
//!
//! These are the fixed field subsets extracted from the external rules API.
//! Optional upstream fields come back empty rather than failing the lookup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One compendium lookup result, shaped by the category that was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CompendiumEntry {
    Weapon(WeaponEntry),
    Monster(MonsterEntry),
    Spell(SpellEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeaponEntry {
    pub name: String,
    pub weapon_category: String,
    pub damage_dice: String,
    pub damage_type: String,
    pub cost_quantity: Option<i64>,
    pub cost_unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonsterEntry {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Walking speed as reported upstream, e.g. "30 ft."
    pub speed: String,
    pub armor_class: Option<i32>,
    pub hit_points: Option<i32>,
    pub hit_dice: String,
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
    pub challenge_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpellEntry {
    pub name: String,
    pub level: Option<i32>,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub description: Vec<String>,
    /// Empty when the spell has no at-higher-levels text
    pub higher_level: Vec<String>,
}

/// The known lookup keys for each category, for populating pickers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub melee_weapons: Vec<String>,
    pub ranged_weapons: Vec<String>,
    pub monsters: Vec<String>,
    pub spells: Vec<String>,
}
