use titanbot::{
    bot, config::Config, error::AppError, startup, state::AppState, sync::keyed_mutex::KeyedMutex,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let ranks = startup::load_rank_table(&config)?;
    let state = AppState::new(db, KeyedMutex::new(), ranks);

    tracing::info!("Starting titanbot");

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
