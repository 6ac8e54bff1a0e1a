//! Reference lookups against the external rules API.
//!
//! The compendium is a stateless pass-through: a category and a key are
//! forwarded to the rules data source (by default the 5e SRD API) and a fixed
//! subset of fields is extracted for display. Nothing is cached and nothing
//! is retried; every request re-fetches. Fields the upstream document omits
//! are defaulted to empty values instead of failing the lookup.

pub mod catalog;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;
use utoipa::ToSchema;

use crate::{
    api::models::compendium::{CompendiumEntry, MonsterEntry, SpellEntry, WeaponEntry},
    config::CompendiumConfig,
    errors::Error,
};

/// Lookup category, selecting both the upstream collection and the shape of
/// the extracted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MeleeWeapon,
    RangedWeapon,
    Monster,
    Spell,
}

impl Category {
    /// Upstream collection path segment for this category
    pub fn collection(self) -> &'static str {
        match self {
            Category::MeleeWeapon | Category::RangedWeapon => "equipment",
            Category::Monster => "monsters",
            Category::Spell => "spells",
        }
    }
}

/// Makes sure a url has a trailing slash.
///
/// This fixes a weird idiosyncracy in rusts 'join' method on urls, where joining URLs like
/// '/hello', 'world' gives you '/world', but '/hello/', 'world' gives you '/hello/world'.
/// Basically, call this before calling .join
fn ensure_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        url.clone()
    } else {
        let mut new_url = url.clone();
        let mut path = new_url.path().to_string();
        path.push('/');
        new_url.set_path(&path);
        new_url
    }
}

// Wire documents: only the extracted fields are declared, everything else in
// the upstream payload is ignored.

#[derive(Debug, Deserialize)]
struct NamedDoc {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CostDoc {
    quantity: Option<i64>,
    unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DamageDoc {
    damage_dice: Option<String>,
    damage_type: Option<NamedDoc>,
}

#[derive(Debug, Deserialize)]
struct WeaponDoc {
    name: Option<String>,
    weapon_category: Option<String>,
    damage: Option<DamageDoc>,
    cost: Option<CostDoc>,
}

#[derive(Debug, Deserialize)]
struct SpeedDoc {
    walk: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MonsterDoc {
    name: Option<String>,
    size: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    speed: Option<SpeedDoc>,
    // Older revisions of the rules API report a bare integer here, newer ones
    // a list of {type, value} objects; accept both.
    #[serde(default, deserialize_with = "flexible_int")]
    armor_class: Option<i32>,
    hit_points: Option<i32>,
    hit_dice: Option<String>,
    strength: Option<i32>,
    dexterity: Option<i32>,
    constitution: Option<i32>,
    intelligence: Option<i32>,
    wisdom: Option<i32>,
    charisma: Option<i32>,
    challenge_rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SpellDoc {
    name: Option<String>,
    level: Option<i32>,
    school: Option<NamedDoc>,
    casting_time: Option<String>,
    range: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    desc: Vec<String>,
    #[serde(default)]
    higher_level: Vec<String>,
}

fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(int_from_value))
}

fn int_from_value(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().map(|i| i as i32),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("value"))
            .and_then(|v| v.as_i64())
            .map(|i| i as i32),
        _ => None,
    }
}

impl From<WeaponDoc> for WeaponEntry {
    fn from(doc: WeaponDoc) -> Self {
        let (damage_dice, damage_type) = match doc.damage {
            Some(damage) => (
                damage.damage_dice.unwrap_or_default(),
                damage.damage_type.and_then(|t| t.name).unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };
        let (cost_quantity, cost_unit) = match doc.cost {
            Some(cost) => (cost.quantity, cost.unit.unwrap_or_default()),
            None => (None, String::new()),
        };

        Self {
            name: doc.name.unwrap_or_default(),
            weapon_category: doc.weapon_category.unwrap_or_default(),
            damage_dice,
            damage_type,
            cost_quantity,
            cost_unit,
        }
    }
}

impl From<MonsterDoc> for MonsterEntry {
    fn from(doc: MonsterDoc) -> Self {
        Self {
            name: doc.name.unwrap_or_default(),
            size: doc.size.unwrap_or_default(),
            kind: doc.kind.unwrap_or_default(),
            speed: doc.speed.and_then(|s| s.walk).unwrap_or_default(),
            armor_class: doc.armor_class,
            hit_points: doc.hit_points,
            hit_dice: doc.hit_dice.unwrap_or_default(),
            strength: doc.strength,
            dexterity: doc.dexterity,
            constitution: doc.constitution,
            intelligence: doc.intelligence,
            wisdom: doc.wisdom,
            charisma: doc.charisma,
            challenge_rating: doc.challenge_rating,
        }
    }
}

impl From<SpellDoc> for SpellEntry {
    fn from(doc: SpellDoc) -> Self {
        Self {
            name: doc.name.unwrap_or_default(),
            level: doc.level,
            school: doc.school.and_then(|s| s.name).unwrap_or_default(),
            casting_time: doc.casting_time.unwrap_or_default(),
            range: doc.range.unwrap_or_default(),
            duration: doc.duration.unwrap_or_default(),
            description: doc.desc,
            higher_level: doc.higher_level,
        }
    }
}

/// HTTP client for the external rules data source.
#[derive(Debug, Clone)]
pub struct CompendiumClient {
    client: Client,
    base_url: Url,
}

impl CompendiumClient {
    pub fn new(config: &CompendiumConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch one entry from the rules API and extract its display fields.
    #[instrument(skip(self), err)]
    pub async fn lookup(&self, category: Category, key: &str) -> Result<CompendiumEntry, Error> {
        // Keys are slugs like "crossbow-light"; reject anything that could
        // change the request path.
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
            return Err(Error::BadRequest {
                message: format!("Invalid compendium key {key:?}"),
            });
        }

        let collection = category.collection();
        let url = ensure_slash(&self.base_url)
            .join(&format!("{collection}/{key}"))
            .map_err(|e| Error::Internal {
                operation: format!("construct compendium URL: {e}"),
            })?;

        debug!("Fetching compendium entry from URL: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            Error::Other(anyhow::Error::from(e).context(format!("request compendium entry {collection}/{key}")))
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                resource: "Compendium entry".to_string(),
                id: key.to_string(),
            });
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Rules API error for {}: {} - {}", url, status, body);
            return Err(Error::Other(anyhow::anyhow!("rules API error: {status} - {body}")));
        }

        // Get the response body as text first for logging
        let body_text = response.text().await.map_err(|e| Error::Other(anyhow::Error::from(e)))?;
        tracing::debug!("Rules API response body: {}", body_text);

        let entry = match category {
            Category::MeleeWeapon | Category::RangedWeapon => {
                let doc: WeaponDoc = parse_doc(&body_text, collection, key)?;
                CompendiumEntry::Weapon(WeaponEntry::from(doc))
            }
            Category::Monster => {
                let doc: MonsterDoc = parse_doc(&body_text, collection, key)?;
                CompendiumEntry::Monster(MonsterEntry::from(doc))
            }
            Category::Spell => {
                let doc: SpellDoc = parse_doc(&body_text, collection, key)?;
                CompendiumEntry::Spell(SpellEntry::from(doc))
            }
        };

        Ok(entry)
    }
}

fn parse_doc<'a, T: Deserialize<'a>>(body: &'a str, collection: &str, key: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!("Failed to parse rules API response for {}/{}. Error: {}", collection, key, e);
        tracing::error!("Response body was: {}", body);
        Error::Other(anyhow::anyhow!("error decoding rules API response body: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> CompendiumClient {
        let config = CompendiumConfig {
            base_url: Url::parse(&format!("{}/api", server.uri())).unwrap(),
            request_timeout: Duration::from_secs(5),
        };
        CompendiumClient::new(&config)
    }

    #[tokio::test]
    async fn test_weapon_lookup_extracts_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment/longsword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "index": "longsword",
                "name": "Longsword",
                "weapon_category": "Martial",
                "damage": {
                    "damage_dice": "1d8",
                    "damage_type": { "index": "slashing", "name": "Slashing" }
                },
                "cost": { "quantity": 15, "unit": "gp" },
                "weight": 3
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let entry = client.lookup(Category::MeleeWeapon, "longsword").await.unwrap();

        match entry {
            CompendiumEntry::Weapon(weapon) => {
                assert_eq!(weapon.name, "Longsword");
                assert_eq!(weapon.weapon_category, "Martial");
                assert_eq!(weapon.damage_dice, "1d8");
                assert_eq!(weapon.damage_type, "Slashing");
                assert_eq!(weapon.cost_quantity, Some(15));
                assert_eq!(weapon.cost_unit, "gp");
            }
            other => panic!("expected weapon entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spell_without_higher_level_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/spells/shield"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "index": "shield",
                "name": "Shield",
                "level": 1,
                "school": { "index": "abjuration", "name": "Abjuration" },
                "casting_time": "1 reaction",
                "range": "Self",
                "duration": "1 round",
                "desc": ["An invisible barrier of magical force appears and protects you."]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let entry = client.lookup(Category::Spell, "shield").await.unwrap();

        match entry {
            CompendiumEntry::Spell(spell) => {
                assert_eq!(spell.name, "Shield");
                assert_eq!(spell.level, Some(1));
                assert_eq!(spell.school, "Abjuration");
                assert!(spell.higher_level.is_empty());
                assert_eq!(spell.description.len(), 1);
            }
            other => panic!("expected spell entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_monster_lookup_tolerates_armor_class_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/monsters/goblin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "index": "goblin",
                "name": "Goblin",
                "size": "Small",
                "type": "humanoid",
                "speed": { "walk": "30 ft." },
                "armor_class": [{ "type": "armor", "value": 15 }],
                "hit_points": 7,
                "hit_dice": "2d6",
                "strength": 8,
                "dexterity": 14,
                "constitution": 10,
                "intelligence": 10,
                "wisdom": 8,
                "charisma": 8,
                "challenge_rating": 0.25
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let entry = client.lookup(Category::Monster, "goblin").await.unwrap();

        match entry {
            CompendiumEntry::Monster(monster) => {
                assert_eq!(monster.name, "Goblin");
                assert_eq!(monster.speed, "30 ft.");
                assert_eq!(monster.armor_class, Some(15));
                assert_eq!(monster.hit_points, Some(7));
                assert_eq!(monster.challenge_rating, Some(0.25));
            }
            other => panic!("expected monster entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/monsters/tarrasque-prime"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.lookup(Category::Monster, "tarrasque-prime").await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/spells/fireball"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let err = client.lookup(Category::Spell, "fireball").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_suspicious_keys_are_rejected() {
        let server = MockServer::start().await;
        let client = test_client(&server).await;

        for key in ["", "Goblin", "goblin/../secrets", "a b"] {
            let err = client.lookup(Category::Monster, key).await.unwrap_err();
            assert!(matches!(err, Error::BadRequest { .. }), "key {key:?} should be rejected");
        }
    }
}
