//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use commerce::{PgCommerceRepository, commerce_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,commerce=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration: the environment is read here and nowhere
    // else. Debug builds run on random per-process secrets, so every
    // restart signs everyone out.
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        load_auth_config()?
    };

    let auth_repo = PgAuthRepository::new(pool.clone());
    let commerce_repo = PgCommerceRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(auth_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/api",
            commerce_router(commerce_repo, auth_repo, auth_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the production auth configuration from the environment
///
/// Secrets are required in release builds; a missing one is a startup
/// failure, never a silent fallback.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let access_token_secret =
        env::var("JWT_ACCESS_SECRET").expect("JWT_ACCESS_SECRET must be set in production");
    let refresh_token_secret =
        env::var("JWT_REFRESH_SECRET").expect("JWT_REFRESH_SECRET must be set in production");

    let hash_key_b64 =
        env::var("SESSION_HASH_KEY").expect("SESSION_HASH_KEY must be set in production");
    let hash_key_bytes = Engine::decode(&general_purpose::STANDARD, &hash_key_b64)?;
    if hash_key_bytes.len() != 32 {
        anyhow::bail!("SESSION_HASH_KEY must decode to exactly 32 bytes");
    }
    let mut session_hash_key = [0u8; 32];
    session_hash_key.copy_from_slice(&hash_key_bytes);

    let password_pepper = env::var("PASSWORD_PEPPER").ok().map(String::into_bytes);

    Ok(AuthConfig {
        access_token_secret,
        refresh_token_secret,
        session_hash_key,
        password_pepper,
        ..AuthConfig::default()
    })
}
