//! API request/response models for users.

use crate::db::models::users::UserDBResponse;
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Public profile representation of a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = uuid::Uuid)]
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// URL path the avatar is served from, when one has been uploaded
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserDBResponse> for UserResponse {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            username: db.username,
            email: db.email,
            avatar_url: db.avatar_path.map(|p| format!("/avatars/{p}")),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Profile update payload; both fields overwrite the stored values.
/// Uniqueness is only re-checked for values that actually change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AccountUpdate {
    #[validate(length(min = 2, max = 40))]
    pub username: String,
    #[validate(email)]
    pub email: String,
}

/// The authenticated identity resolved from the session, passed explicitly
/// into every ownership-sensitive operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUser {
    #[schema(value_type = uuid::Uuid)]
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub avatar_path: Option<String>,
}

impl From<UserDBResponse> for CurrentUser {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            username: db.username,
            email: db.email,
            avatar_path: db.avatar_path,
        }
    }
}

impl From<UserResponse> for CurrentUser {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar_path: None, // The public response carries a URL, not the stored path
        }
    }
}
