//! Periodic heartbeat task.
//!
//! # Responsibilities
//! - Emit a log line and increment the heartbeat counter on a fixed interval
//! - Run for the lifetime of the process, independent of request traffic

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::HeartbeatConfig;
use crate::observability::Metrics;

pub struct Heartbeat {
    config: HeartbeatConfig,
    metrics: Arc<Metrics>,
}

impl Heartbeat {
    pub fn new(config: HeartbeatConfig, metrics: Arc<Metrics>) -> Self {
        Self { config, metrics }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.config.enabled {
            tracing::info!("Heartbeat disabled");
            return;
        }

        tracing::info!(
            interval = self.config.interval_secs,
            "Heartbeat starting"
        );

        let interval = Duration::from_secs(self.config.interval_secs);
        let mut ticker = time::interval(interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.metrics.heartbeat();
                    tracing::info!("Gateway heartbeat");
                }
                _ = shutdown.recv() => {
                    tracing::info!("Heartbeat received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}
