use planner::config::AppConfig;
use planner::db::ConnectionProvider;
use planner::error::AppError;
use planner::routes::create_router;
use planner::services::mailer::mailer_from_config;
use planner::state::AppState;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let provider = ConnectionProvider::connect(&config.database_url, config.max_connections).await?;

    if let Err(err) = provider.migrate().await {
        error!("migration failed: {err:?}");
        return Err(err);
    }

    let mailer = mailer_from_config(&config.mail);
    if config.mail.api_url.is_none() {
        info!("MAIL_API_URL not set, confirmation mails will only be logged");
    }

    let state = AppState::new(
        config.clone(),
        provider.get_connection().clone(),
        mailer,
    );

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    provider.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,planner=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
