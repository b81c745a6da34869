use server::{create_app, AppState, JsonFileSource, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);

    let source = JsonFileSource::new(&config.data_path);
    match source.path().canonicalize() {
        Ok(path) => info!(path = %path.display(), "serving vehicles from file"),
        Err(err) => tracing::warn!(
            path = %source.path().display(),
            error = %err,
            "vehicle data file is not readable yet; requests will fail until it is"
        ),
    }

    //1 Create axum router
    let state = AppState::new(source, config.rules);
    let app = create_app(state, &config.cors_allowed_origins);

    //2 Define the IP and port listener
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %listener.local_addr()?,
        price_window = config.rules.price_window,
        match_registration_date = config.rules.match_registration_date,
        "listening"
    );

    //3 Start the server to launch the webserver
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
