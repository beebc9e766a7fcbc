use log::{error, info};
use service::{config::Config, logging::Logger};
use tokio::time::Duration;

/// How long in-flight requests are given to finish once a shutdown signal arrives.
const GRACE_PERIOD: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting up...");

    let mut server = web::init_server(&config);

    // A failed bind is reported but the process keeps waiting for a signal,
    // the same as a serve error raised later on the background task.
    if let Err(e) = server.start().await {
        error!("listen: {e}");
    }

    web::shutdown_signal().await;

    info!("Shutdown signal received, draining connections...");
    server.shutdown(GRACE_PERIOD).await;

    info!("Server stopped");
}
