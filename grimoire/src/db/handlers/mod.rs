//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection or transaction, provides
//! strongly-typed CRUD operations, and returns the record structs from
//! [`crate::db::models`]. All five implement the [`Repository`] trait; the
//! four campaign-record repositories additionally expose ownership through
//! [`repository::OwnedRecord`] on their response types.

pub mod characters;
pub mod monsters;
pub mod npcs;
pub mod repository;
pub mod shops;
pub mod users;

pub use characters::Characters;
pub use monsters::Monsters;
pub use npcs::Npcs;
pub use repository::{OwnedRecord, Repository};
pub use shops::Shops;
pub use users::Users;
