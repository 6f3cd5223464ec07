//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Spawn the heartbeat task and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::lifecycle::Shutdown;
use crate::observability::metrics::track_requests;
use crate::observability::{Heartbeat, Metrics};
use crate::providers::{upstream_client, QuoteService, WeatherService};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherService,
    pub quotes: QuoteService,
    pub metrics: Arc<Metrics>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    metrics: Arc<Metrics>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the upstream HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig, metrics: Arc<Metrics>) -> Result<Self, reqwest::Error> {
        let http = upstream_client(&config.timeouts)?;
        let weather = WeatherService::new(&config.upstream, &config.credentials, http.clone());
        let quotes = QuoteService::new(&config.upstream, &config.credentials, http);

        let state = AppState {
            weather,
            quotes,
            metrics: metrics.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            metrics,
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The metrics middleware wraps only the app endpoints; `/metrics`
    /// itself is not instrumented.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/weather", get(handlers::get_weather))
            .route("/quote", get(handlers::get_quote))
            .route_layer(middleware::from_fn_with_state(
                state.metrics.clone(),
                track_requests,
            ))
            .route("/metrics", get(handlers::get_metrics))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Spawns the heartbeat task and serves until the shutdown signal.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let heartbeat = Heartbeat::new(self.config.heartbeat.clone(), self.metrics.clone());
        let heartbeat_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            heartbeat.run(heartbeat_shutdown).await;
        });

        let mut server_shutdown = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = server_shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
