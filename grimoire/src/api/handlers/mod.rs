//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for request validation and deserialization,
//! resolving the acting user, business logic via the database repositories,
//! and response serialization.
//!
//! # Ownership gating
//!
//! Every campaign record kind enforces the same rule: anyone authenticated
//! may read, only the owner may mutate. Rather than repeating the
//! check-then-mutate sequence per kind, [`update_owned`] and [`delete_owned`]
//! implement it once over any repository whose responses expose an owner.
//! Handlers pass the acting user in explicitly; there is no ambient identity.

pub mod account;
pub mod auth;
pub mod battle;
pub mod characters;
pub mod compendium;
pub mod monsters;
pub mod npcs;
pub mod shops;

use std::fmt::Display;

use crate::{
    api::models::users::CurrentUser,
    db::handlers::repository::{OwnedRecord, Repository},
    errors::{Error, Result},
    types::Operation,
};

/// Overwrite all mutable fields of an owned record, provided `acting_user`
/// owns it. Fails with NotFound for unknown ids and Forbidden for non-owners.
pub(crate) async fn update_owned<R>(
    repo: &mut R,
    id: R::Id,
    request: &R::UpdateRequest,
    acting_user: &CurrentUser,
    kind: &str,
) -> Result<R::Response>
where
    R: Repository + Send,
    R::Id: Copy + Display + Send + Sync,
    R::Response: OwnedRecord + Send,
    R::UpdateRequest: Sync,
{
    let existing = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: kind.to_string(),
        id: id.to_string(),
    })?;

    if existing.owner() != acting_user.id {
        return Err(Error::InsufficientPermissions {
            action: Operation::Update,
            resource: format!("{kind} {id}"),
        });
    }

    Ok(repo.update(id, request).await?)
}

/// Permanently delete an owned record, provided `acting_user` owns it.
pub(crate) async fn delete_owned<R>(repo: &mut R, id: R::Id, acting_user: &CurrentUser, kind: &str) -> Result<()>
where
    R: Repository + Send,
    R::Id: Copy + Display + Send + Sync,
    R::Response: OwnedRecord + Send,
{
    let existing = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: kind.to_string(),
        id: id.to_string(),
    })?;

    if existing.owner() != acting_user.id {
        return Err(Error::InsufficientPermissions {
            action: Operation::Delete,
            resource: format!("{kind} {id}"),
        });
    }

    // The row can only vanish between the check and here if a concurrent
    // delete won; report that as gone.
    if !repo.delete(id).await? {
        return Err(Error::NotFound {
            resource: kind.to_string(),
            id: id.to_string(),
        });
    }

    Ok(())
}
