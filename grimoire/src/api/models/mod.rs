//! API request and response data models.
//!
//! These structures define the public API contract and are distinct from the
//! database models, allowing independent evolution of API and storage
//! representations. Request payloads are statically typed and validated with
//! `validator` before any repository operation runs; all models carry
//! `utoipa` schema annotations for the generated API docs.

pub mod auth;
pub mod battle;
pub mod characters;
pub mod compendium;
pub mod monsters;
pub mod npcs;
pub mod shops;
pub mod users;
