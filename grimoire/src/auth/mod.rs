//! Authentication for the campaign companion.
//!
//! Browser clients authenticate with email/password via `/authentication/login`
//! and carry a JWT session token in a secure HTTP-only cookie. Handlers that
//! need an identity take a [`current_user::CurrentUser`] extractor argument;
//! ownership checks downstream always receive that identity explicitly.
//!
//! # Modules
//!
//! - [`current_user`]: extractor resolving the authenticated user from the session cookie
//! - [`password`]: password hashing and verification using Argon2
//! - [`session`]: JWT session token creation and verification

pub mod current_user;
pub mod password;
pub mod session;
