use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use alertino::alerts::generate::AlertGenerator;
use alertino::config::{self, Config};
use alertino::logger::setup_logger;
use alertino::producer::alert_producer::AlertProducer;
use alertino::web::{self, AppState};

use anyhow::Result;
use log::error;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());

    let generator = Arc::new(AlertGenerator::from_config(&config)?);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    // ctrl-c flips the flag and fans the signal out to both tasks
    {
        let shutdown = shutdown.clone();
        let shutdown_tx = shutdown_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.store(true, Ordering::Release);
                let _ = shutdown_tx.send(());
            }
        });
    }

    // HTTP API (manual trigger + filter/alert CRUD)
    let http_state = AppState {
        config: config.clone(),
        generator: generator.clone(),
    };
    let http_handle = tokio::task::spawn(web::start_http_server(
        http_state,
        shutdown_tx.subscribe(),
    ));

    // Launch producer process
    let producer_rx = shutdown_tx.subscribe();
    let producer_shutdown = shutdown.clone();
    let producer_handle = tokio::task::spawn(async move {
        AlertProducer::run(&config, generator, producer_shutdown, producer_rx).await
    });

    if let Err(err) = tokio::try_join!(producer_handle, http_handle) {
        error!("Error: {:?}", err)
    }

    Ok(())
}
