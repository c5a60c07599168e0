use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use bb_api::app::create_app;
use bb_api::routes::AppState;
use bb_core::services::access::{AccessPolicy, RoleResolver};
use bb_core::services::property::PropertyLifecycleService;
use bb_core::services::token::TokenService;
use bb_core::services::users::UserDirectory;
use bb_infra::{create_pool, MySqlPropertyRepository, MySqlUserRepository};
use bb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting BengalBreeze API Server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Database connections and repositories
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let properties = Arc::new(MySqlPropertyRepository::new(pool));

    // A missing signing secret fails here, before the server binds.
    let tokens = Arc::new(
        TokenService::new(&config.jwt).context("token signing key misconfigured")?,
    );

    // Core services
    let resolver = RoleResolver::new(Arc::clone(&users));
    let state = web::Data::new(AppState::new(
        Arc::clone(&tokens),
        Arc::new(AccessPolicy::new(resolver)),
        Arc::new(UserDirectory::new(users)),
        Arc::new(PropertyLifecycleService::new(properties)),
    ));

    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let keep_alive = std::time::Duration::from_secs(config.server.keep_alive);
    let server = HttpServer::new(move || create_app(state.clone())).keep_alive(keep_alive);
    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
