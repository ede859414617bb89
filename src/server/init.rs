/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP application:
 * database pool creation, migrations, state assembly, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL using the configured `DATABASE_URL`
 * 2. Run pending migrations from `./migrations`
 * 3. Build `AppState` (pool + token configuration)
 * 4. Create the router with all routes and middleware
 *
 * Unlike optional integrations, a failure in steps 1-2 aborts startup:
 * every endpoint needs the store, so there is no degraded mode to fall
 * back to.
 */

use axum::Router;
use sqlx::PgPool;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Application configuration loaded at process start
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns an error if the database connection or migrations fail.
pub async fn create_app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations complete");

    let app_state = AppState {
        pool,
        auth: config.auth.clone(),
    };

    Ok(create_router(app_state))
}
