//! Reference lookup handlers.
//!
//! These are stateless pass-throughs to the external rules API. Unlike the
//! campaign record routes they require no session: the compendium is public
//! reference data.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::models::compendium::{CatalogResponse, CompendiumEntry},
    compendium::{catalog, Category},
    errors::Error,
    AppState,
};

/// Known lookup keys per category, for populating pickers
#[utoipa::path(
    get,
    path = "/compendium/catalog",
    tag = "compendium",
    responses(
        (status = 200, description = "Known keys per category", body = CatalogResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        melee_weapons: catalog::MELEE_WEAPONS.iter().map(|s| s.to_string()).collect(),
        ranged_weapons: catalog::RANGED_WEAPONS.iter().map(|s| s.to_string()).collect(),
        monsters: catalog::MONSTERS.iter().map(|s| s.to_string()).collect(),
        spells: catalog::SPELLS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Look up one entry from the external rules data source.
///
/// Every request re-fetches from upstream; nothing is cached or retried.
#[utoipa::path(
    get,
    path = "/compendium/{category}/{key}",
    tag = "compendium",
    params(
        ("category" = String, Path, description = "melee-weapon, ranged-weapon, monster, or spell"),
        ("key" = String, Path, description = "Lookup key, e.g. longsword or goblin"),
    ),
    responses(
        (status = 200, description = "The extracted entry", body = CompendiumEntry),
        (status = 400, description = "Unknown category or malformed key"),
        (status = 404, description = "No entry with that key upstream"),
        (status = 500, description = "The rules data source failed"),
    )
)]
#[tracing::instrument(skip_all, fields(key = %key))]
pub async fn lookup_entry(
    State(state): State<AppState>,
    Path((category, key)): Path<(Category, String)>,
) -> Result<Json<CompendiumEntry>, Error> {
    let entry = state.compendium.lookup(category, &key).await?;
    Ok(Json(entry))
}
