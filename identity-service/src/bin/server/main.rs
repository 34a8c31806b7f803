use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenIssuer;
use identity_service::config::Config;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::PostgresUserDirectory;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_minutes = config.jwt.lifetime_minutes,
        argon2_memory_kib = config.password.memory_kib,
        argon2_iterations = config.password.iterations,
        argon2_parallelism = config.password.parallelism,
        "Configuration loaded"
    );

    // Both fail fast: a service that cannot sign or hash must not start.
    let token_lifetime = chrono::Duration::try_minutes(config.jwt.lifetime_minutes)
        .ok_or_else(|| anyhow::anyhow!("jwt.lifetime_minutes is out of range"))?;
    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt.secret.as_bytes(),
        token_lifetime,
    )?);
    let password_hasher = Arc::new(PasswordHasher::with_params(
        config.password.memory_kib,
        config.password.iterations,
        config.password.parallelism,
    )?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_directory = Arc::new(PostgresUserDirectory::new(pg_pool));
    let auth_service = Arc::new(AuthService::new(
        user_directory,
        password_hasher,
        Arc::clone(&token_issuer),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_issuer);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
