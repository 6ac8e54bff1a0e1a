//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern: each entity (users, characters,
//! monsters, npcs, shops) has a repository in [`handlers`] that owns query
//! construction and returns the record structs in [`models`].
//!
//! Repositories wrap a `&mut PgConnection`, so callers decide whether an
//! operation runs on a pool connection or inside a transaction:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let mut repo = Users::new(&mut tx);
//! let user = repo.create(&create_request).await?;
//! tx.commit().await?;
//! ```
//!
//! Migrations live in `migrations/` and are exposed through [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
