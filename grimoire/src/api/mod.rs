//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! The API has three functional areas: authentication (`/authentication/*`),
//! campaign records and the battle view (`/api/v1/*`), and the read-only
//! compendium (`/api/v1/compendium/*`). All endpoints are documented with
//! OpenAPI annotations via `utoipa`; the rendered docs are served at `/docs`.

pub mod handlers;
pub mod models;
