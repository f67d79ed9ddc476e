use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::info;
use tokio::sync::broadcast::Receiver;

use crate::alerts::generate::AlertGenerator;
use crate::config::Config;

pub struct AlertProducer;

impl AlertProducer {
    /// Scheduled trigger: run the generator, sleep, repeat until shutdown.
    pub async fn run(
        config: &Arc<Config>,
        generator: Arc<AlertGenerator>,
        shutdown: Arc<AtomicBool>,
        mut shutdown_rx: Receiver<()>,
    ) -> Result<()> {
        let interval_in_seconds = config.producer_timeout_seconds as u64;
        let interval = Duration::from_secs(interval_in_seconds);

        while !shutdown.load(Ordering::Acquire) {
            info!("Starting AlertProducer run");
            let start = Instant::now();

            let summary = generator.generate_alerts().await;

            let duration = start.elapsed();
            info!(
                "Finished AlertProducer run in {:?}: {:?}",
                duration, summary
            );

            tokio::select! {
               _ = tokio::time::sleep(interval) => {}
               _ = shutdown_rx.recv() => {
                   break
               }
            }
        }
        Ok(())
    }
}
