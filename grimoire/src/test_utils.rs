//! Test utilities shared by the handler and repository tests.

use axum_test::TestServer;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    api::models::users::CurrentUser,
    auth::session::create_session_token,
    compendium::CompendiumClient,
    config::{Config, SessionConfig},
    db::{
        handlers::{Repository, Users},
        models::users::{UserCreateDBRequest, UserDBResponse},
    },
    AppState,
};

/// Config suitable for tests: fixed secret, plain-HTTP cookies, avatars in a
/// per-process temp directory.
pub fn create_test_config() -> Config {
    let temp_dir = std::env::temp_dir().join(format!("grimoire-test-avatars-{}", std::process::id()));

    let mut config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        secret_key: Some("test-secret-key-for-testing-only".to_string()),
        ..Default::default()
    };
    config.auth.native.session = SessionConfig {
        cookie_secure: false,
        ..Default::default()
    };
    config.uploads.avatar_dir = temp_dir;
    config
}

/// Build an application state over the given pool and config.
pub fn test_state(pool: PgPool, config: Config) -> AppState {
    let compendium = CompendiumClient::new(&config.compendium);
    AppState::builder().db(pool).config(config).compendium(compendium).build()
}

/// Full router wired into an axum-test server, with the default test config.
pub async fn test_server(pool: PgPool) -> (TestServer, AppState) {
    test_server_with_config(pool, create_test_config()).await
}

/// Full router wired into an axum-test server, with a caller-supplied config.
pub async fn test_server_with_config(pool: PgPool, config: Config) -> (TestServer, AppState) {
    let state = test_state(pool, config);
    let router = crate::build_router(state.clone()).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, state)
}

/// Insert a user directly through the repository.
pub async fn create_test_user(pool: &PgPool, name: &str) -> UserDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut users_repo = Users::new(&mut conn);

    users_repo
        .create(&UserCreateDBRequest {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: format!("$argon2id$test${}", Uuid::new_v4().simple()),
            avatar_path: None,
        })
        .await
        .expect("Failed to create test user")
}

/// Cookie header value carrying a fresh session for the given user.
pub fn session_cookie(user: &UserDBResponse, config: &Config) -> String {
    let current_user = CurrentUser::from(user.clone());
    let token = create_session_token(&current_user, config).expect("Failed to create session token");
    format!("{}={}", config.auth.native.session.cookie_name, token)
}
