//! OpenAPI documentation for the campaign companion API.
//!
//! The rendered docs are served at `/docs`. Routes under `/api/v1` are
//! documented with their nested paths relative to that prefix.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::auth::get_registration_info,
        crate::api::handlers::auth::register,
        crate::api::handlers::auth::get_login_info,
        crate::api::handlers::auth::login,
        crate::api::handlers::auth::logout,
        crate::api::handlers::account::get_account,
        crate::api::handlers::account::update_account,
        crate::api::handlers::account::upload_avatar,
        crate::api::handlers::characters::create_character,
        crate::api::handlers::characters::list_characters,
        crate::api::handlers::characters::get_character,
        crate::api::handlers::characters::update_character,
        crate::api::handlers::characters::delete_character,
        crate::api::handlers::monsters::create_monster,
        crate::api::handlers::monsters::list_monsters,
        crate::api::handlers::monsters::get_monster,
        crate::api::handlers::monsters::update_monster,
        crate::api::handlers::monsters::delete_monster,
        crate::api::handlers::npcs::create_npc,
        crate::api::handlers::npcs::list_npcs,
        crate::api::handlers::npcs::get_npc,
        crate::api::handlers::npcs::update_npc,
        crate::api::handlers::npcs::delete_npc,
        crate::api::handlers::shops::create_shop,
        crate::api::handlers::shops::list_shops,
        crate::api::handlers::shops::get_shop,
        crate::api::handlers::shops::update_shop,
        crate::api::handlers::shops::delete_shop,
        crate::api::handlers::battle::get_battle_view,
        crate::api::handlers::compendium::get_catalog,
        crate::api::handlers::compendium::lookup_entry,
    ),
    components(schemas(
        crate::api::models::auth::RegisterRequest,
        crate::api::models::auth::LoginRequest,
        crate::api::models::auth::AuthResponse,
        crate::api::models::auth::AuthSuccessResponse,
        crate::api::models::auth::RegistrationInfo,
        crate::api::models::auth::LoginInfo,
        crate::api::models::users::UserResponse,
        crate::api::models::users::AccountUpdate,
        crate::api::models::characters::CharacterCreate,
        crate::api::models::characters::CharacterUpdate,
        crate::api::models::characters::CharacterResponse,
        crate::api::models::monsters::MonsterCreate,
        crate::api::models::monsters::MonsterUpdate,
        crate::api::models::monsters::MonsterResponse,
        crate::api::models::npcs::NpcCreate,
        crate::api::models::npcs::NpcUpdate,
        crate::api::models::npcs::NpcResponse,
        crate::api::models::shops::ShopCreate,
        crate::api::models::shops::ShopUpdate,
        crate::api::models::shops::ShopResponse,
        crate::api::models::battle::BattleResponse,
        crate::api::models::compendium::CompendiumEntry,
        crate::api::models::compendium::WeaponEntry,
        crate::api::models::compendium::MonsterEntry,
        crate::api::models::compendium::SpellEntry,
        crate::api::models::compendium::CatalogResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "authentication", description = "Registration, login, and logout"),
        (name = "account", description = "Profile management for the authenticated user"),
        (name = "characters", description = "Player character records"),
        (name = "monsters", description = "Monster records"),
        (name = "npcs", description = "Non-player character records"),
        (name = "shops", description = "Shop records"),
        (name = "battle", description = "The shared battle view"),
        (name = "compendium", description = "Reference lookups against the rules API"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("grimoire_session"))),
            );
        }
    }
}
