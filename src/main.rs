mod server;

use crate::server::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let state = startup::build_state(&config, http_client);

    tracing::info!("Starting bot");

    let client = bot::start::init_bot(&config, state).await?;
    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
