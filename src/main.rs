use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use startup_evaluator::auth::session_middleware;
use startup_evaluator::{configure_routes, cors, AppError, AppState, Settings};
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[actix_web::main]
async fn main() -> startup_evaluator::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    // Load configuration
    let config = Settings::new()?;
    info!("Configuration loaded successfully ({})", config.environment);

    info!("Starting server at {}:{}", config.server.host, config.server.port);
    if !config.auth.require_login {
        info!("Login is not required for /evaluate");
    }

    // Initialize application state
    let state = AppState::new(config.clone()).await?;
    let data = web::Data::new(state.clone());

    let listener = TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))?;

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config.cors))
            .wrap(session_middleware(&server_config.auth))
            .app_data(data.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    info!("Server stopped");
    state.shutdown().await?;

    Ok(())
}
