//! # grimoire: a campaign companion for tabletop RPG groups
//!
//! `grimoire` is a self-hostable web service for running tabletop RPG
//! campaigns. Registered users keep their characters, monsters, NPCs, and
//! shops in one place, share a combined battle view with the rest of the
//! table, and look up reference data (weapons, monsters, spells) proxied
//! from an external rules API.
//!
//! ## Overview
//!
//! The service exposes a JSON REST API. Identity is established once per
//! request from a JWT session cookie and passed explicitly into every
//! ownership-sensitive operation: any authenticated user can read any
//! campaign record, but only the user who created a record may update or
//! delete it. There is no sharing, no roles, and no soft delete - records
//! belong to exactly one user and removal is permanent.
//!
//! ### Request Flow
//!
//! A request first hits the tracing and CORS layers, then the router. For
//! campaign record routes the `CurrentUser` extractor verifies the session
//! cookie and rejects unauthenticated requests with 401. Handlers validate
//! the typed payload, run the generic ownership gate where the operation
//! mutates an existing record, and call into the repository layer. Reference
//! lookups skip storage entirely: the compendium client forwards the key to
//! the configured rules API and extracts a fixed field subset per category,
//! tolerating absent optional fields.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) holds the axum handlers and the typed
//! request/response models, including the single authorization-gated
//! update/delete used by all record kinds.
//!
//! The **authentication layer** ([`auth`]) covers Argon2 password hashing,
//! JWT session tokens, and the request extractor resolving the acting user.
//!
//! The **database layer** ([`db`]) uses the repository pattern over SQLx and
//! PostgreSQL. Each entity has a repository handling queries and mutations;
//! migrations run automatically on startup.
//!
//! The **compendium** ([`compendium`]) is the outbound HTTP client for the
//! rules data source, plus the catalog of known lookup keys.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use grimoire::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Parse CLI arguments and load configuration
//!     let args = grimoire::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     // Initialize telemetry (structured logging)
//!     grimoire::telemetry::init_telemetry()?;
//!
//!     // Create and start the application
//!     let app = Application::new(config).await?;
//!
//!     // Run with graceful shutdown on Ctrl+C
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod auth;
pub mod compendium;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use bon::Builder;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, instrument, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::compendium::CompendiumClient;
use crate::config::CorsOrigin;
use crate::openapi::ApiDoc;

pub use config::Config;
pub use types::{CharacterId, MonsterId, NpcId, ShopId, UserId};

/// Application state shared across all request handlers.
///
/// # Fields
///
/// - `db`: PostgreSQL connection pool
/// - `config`: application configuration loaded from file/environment
/// - `compendium`: HTTP client for the external rules data source
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub compendium: CompendiumClient,
}

/// Get the grimoire database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = Vec::new();
    for origin in &config.auth.security.cors.allowed_origins {
        let header_value = match origin {
            CorsOrigin::Wildcard => "*".parse::<HeaderValue>()?,
            CorsOrigin::Url(url) => url.as_str().parse::<HeaderValue>()?,
        };
        origins.push(header_value);
    }

    let mut cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(config.auth.security.cors.allow_credentials);

    if let Some(max_age) = config.auth.security.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
///
/// - Authentication routes at the root (`/authentication/*`)
/// - Campaign records, battle view, and compendium under `/api/v1`
/// - Uploaded avatars served from `/avatars`
/// - API docs at `/docs`, health probe at `/healthz`
/// - CORS and tracing layers from configuration
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    // Authentication routes (at root level)
    let auth_routes = Router::new()
        .route(
            "/authentication/register",
            get(api::handlers::auth::get_registration_info).post(api::handlers::auth::register),
        )
        .route(
            "/authentication/login",
            get(api::handlers::auth::get_login_info).post(api::handlers::auth::login),
        )
        .route("/authentication/logout", post(api::handlers::auth::logout))
        .with_state(state.clone());

    // API routes
    let api_routes = Router::new()
        // Profile management
        .route(
            "/account",
            get(api::handlers::account::get_account).put(api::handlers::account::update_account),
        )
        .route("/account/avatar", post(api::handlers::account::upload_avatar))
        // Characters
        .route(
            "/characters",
            get(api::handlers::characters::list_characters).post(api::handlers::characters::create_character),
        )
        .route(
            "/characters/{id}",
            get(api::handlers::characters::get_character)
                .put(api::handlers::characters::update_character)
                .delete(api::handlers::characters::delete_character),
        )
        // Monsters
        .route(
            "/monsters",
            get(api::handlers::monsters::list_monsters).post(api::handlers::monsters::create_monster),
        )
        .route(
            "/monsters/{id}",
            get(api::handlers::monsters::get_monster)
                .put(api::handlers::monsters::update_monster)
                .delete(api::handlers::monsters::delete_monster),
        )
        // NPCs
        .route("/npcs", get(api::handlers::npcs::list_npcs).post(api::handlers::npcs::create_npc))
        .route(
            "/npcs/{id}",
            get(api::handlers::npcs::get_npc)
                .put(api::handlers::npcs::update_npc)
                .delete(api::handlers::npcs::delete_npc),
        )
        // Shops
        .route("/shops", get(api::handlers::shops::list_shops).post(api::handlers::shops::create_shop))
        .route(
            "/shops/{id}",
            get(api::handlers::shops::get_shop)
                .put(api::handlers::shops::update_shop)
                .delete(api::handlers::shops::delete_shop),
        )
        // Shared battle view
        .route("/battle", get(api::handlers::battle::get_battle_view))
        // Compendium (public reference data)
        .route("/compendium/catalog", get(api::handlers::compendium::get_catalog))
        .route("/compendium/{category}/{key}", get(api::handlers::compendium::lookup_entry))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .merge(auth_routes)
        .nest("/api/v1", api_routes)
        .nest_service("/avatars", ServeDir::new(&state.config.uploads.avatar_dir))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Create CORS layer from config
    let cors_layer = create_cors_layer(&state.config)?;
    let router = router.layer(cors_layer);

    // Add tracing layer
    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool, runs migrations,
///    and builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts
///    handling requests
/// 3. **Shutdown**: when the shutdown future resolves, in-flight requests
///    drain and connections close
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        tracing::debug!("Starting campaign companion with configuration: {:#?}", config);

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url)
            .await?;
        migrator().run(&pool).await?;

        // The avatar directory must exist before ServeDir and uploads touch it
        tokio::fs::create_dir_all(&config.uploads.avatar_dir).await?;

        let compendium = CompendiumClient::new(&config.compendium);
        let state = AppState::builder().db(pool.clone()).config(config.clone()).compendium(compendium).build();

        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Campaign companion listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::test_utils::test_server;
    use sqlx::PgPool;

    #[sqlx::test]
    async fn test_healthz(pool: PgPool) {
        let (server, _state) = test_server(pool).await;

        let response = server.get("/healthz").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "OK");
    }

    #[sqlx::test]
    async fn test_unauthenticated_api_requests_are_rejected(pool: PgPool) {
        let (server, _state) = test_server(pool).await;

        for path in ["/api/v1/characters", "/api/v1/monsters", "/api/v1/npcs", "/api/v1/shops", "/api/v1/battle"] {
            let response = server.get(path).await;
            response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
        }
    }
}
