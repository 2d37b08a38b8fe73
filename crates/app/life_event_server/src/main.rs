//! Life Event API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "life_event_server", about = "Life Event API server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5004)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/life_event"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,life_event_api=debug,life_event_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    info!(port = args.port, "starting life_event_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    // Run database migrations.
    info!("running database migrations");
    life_event_api::migrate(&pool).await?;

    let config = life_event_api::config::ApiConfig {
        bind_addr: format!("0.0.0.0:{}", args.port),
        pg_connection_url: args.database_url,
        jwt_secret: life_event_core::auth::jwt::resolve_jwt_secret(),
    };

    let state = life_event_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = life_event_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "Life Event is sitting");

    axum::serve(listener, app).await?;

    Ok(())
}
