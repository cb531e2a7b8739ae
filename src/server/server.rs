//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::jobs::JobOrchestrator;
use crate::core::weather::OpenWeatherClient;
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::LocalStorage;
use crate::utils::error::{GatewayError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server wired to the OpenWeatherMap client and
    /// local artifact storage
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let source = Arc::new(OpenWeatherClient::new(config.upstream())?);
        let storage = Arc::new(LocalStorage::new(&config.storage().output_dir).await?);
        let orchestrator = JobOrchestrator::new(source, storage.clone(), config.upstream());

        let state = AppState::new(config.clone(), orchestrator, storage);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let json_config = web::JsonConfig::default()
            .limit(state.config.server().max_body_size)
            .error_handler(|err, _req| GatewayError::from(err).into());

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "weather-batch-rs")))
            .route("/health", web::get().to(health_check))
            .configure(routes::weather::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| GatewayError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
