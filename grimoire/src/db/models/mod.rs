//! Database record structures matching table schemas.
//!
//! These are distinct from the API models in [`crate::api::models`]: database
//! requests carry the owning user and server-assigned fields, and responses
//! include columns (like password hashes) that never leave the service.

pub mod characters;
pub mod monsters;
pub mod npcs;
pub mod shops;
pub mod users;
