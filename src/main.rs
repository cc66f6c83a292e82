use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matinee::{api::ApiClient, app, config::Config, terminal::Terminal};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matinee=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!("Starting matinee against {}", config.backend_url);

    let api = ApiClient::new(&config).expect("failed to build HTTP client");
    let mut terminal = Terminal::new();

    let Some(session) = app::login(&api, &mut terminal).await else {
        return;
    };

    app::run(&api, &session, &mut terminal).await;
}
