//! Base repository trait for database operations.
//!
//! A repository is a data access layer for one postgres table. It provides
//! methods for creating, reading, updating, deleting, and listing entities.
//! List has no filter or pagination arguments: every caller of `list` in this
//! system wants the full record set (the shared battle and reference views
//! combine all users' records).

use crate::db::errors::Result;
use crate::types::UserId;

/// Base repository trait providing common database operations
///
/// This trait has separate associated types for create requests, update requests, and responses.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List every entity, regardless of owner
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Update an entity by ID, overwriting all mutable fields
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;

    /// Delete an entity by ID; returns whether a row was removed
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;
}

/// A record owned by a single user.
///
/// Implemented by the response types of campaign-record repositories so the
/// API layer can run one generic owner check ahead of any mutation. The check
/// itself belongs to the API layer - the database layer never makes
/// authorization decisions.
pub trait OwnedRecord {
    /// The user this record belongs to
    fn owner(&self) -> UserId;
}
