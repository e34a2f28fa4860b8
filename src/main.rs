use std::sync::Arc;

use guild_cloner::server::{
    bot::{self, directory::CacheGuildDirectory, remote::SerenityRemote},
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let bot_client = bot::start::init_bot(&config).await?;
    let directory = CacheGuildDirectory::new(bot_client.cache.clone());
    let remote = SerenityRemote::new(bot_client.http.clone());

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router::router().with_state(AppState::new(
        db,
        Arc::new(directory),
        Arc::new(remote),
        config.call_policy(),
    ));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Status server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
