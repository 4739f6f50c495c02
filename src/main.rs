use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use marriagebot::server::{bot, config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let locks = startup::build_lock_backend(&config, &db);

    // Both bots share one lock backend so a user can't run a proposal on each at once
    let mut bots =
        vec![bot::start::init_bot(&config.discord_bot_token, "main", locks.clone()).await?];
    if let Some(token) = &config.gold_discord_bot_token {
        bots.push(bot::start::init_bot(token, "gold", locks.clone()).await?);
    }

    let shard_managers: Vec<_> = bots
        .iter()
        .map(|client| client.shard_manager.clone())
        .collect();

    for client in bots {
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });
    }

    let app = router::router(&config.static_dir)
        .with_state(AppState::new(db.clone()))
        .layer(session);

    tracing::info!("Creating webserver");
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server started - http://{}/", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Closed webserver");

    for shard_manager in shard_managers {
        shard_manager.shutdown_all().await;
    }
    tracing::info!("Closed bot connections");

    db.close().await?;
    tracing::info!("Closed database pool");

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received ctrl-c, shutting down"),
        Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
    }
}
