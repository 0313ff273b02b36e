//! HTTP server assembly and lifecycle.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::rest::{audit_routes, health_routes, AppState};
use crate::schema::{audit_schema, Validator};
use crate::settings::Settings;
use crate::store::{FilterAllowList, MemoryStore};

/// Listen address configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8092,
        }
    }
}

impl ServerConfig {
    fn socket_addr(&self) -> io::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid bind address '{}:{}': {}", self.host, self.port, e),
                )
            })
    }
}

/// The assembled service: audit routes plus the health probe, behind
/// request tracing and permissive CORS.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Wires the schema, store, and routes into a ready-to-serve router.
    pub fn new(config: ServerConfig, settings: Settings) -> Self {
        let schema = audit_schema();
        let store = MemoryStore::with_policy(
            schema.clone(),
            FilterAllowList::from_patterns(&settings.allowed_filters),
            settings.validate_filters,
            settings.pagination_limit,
        );

        let state = Arc::new(AppState {
            validator: Validator::new(schema),
            store: Arc::new(store),
            settings,
        });

        let router = Router::new()
            .merge(health_routes())
            .merge(audit_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        HttpServer { config, router }
    }

    /// The router alone, for in-process exercise without a socket.
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the configured address and serves until the task is dropped.
    pub async fn start(self) -> io::Result<()> {
        let addr = self.config.socket_addr()?;

        println!("auditstore listening on http://{}", addr);
        tracing::info!(%addr, "server started");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8092);
        assert!(config.socket_addr().is_ok());
    }

    #[test]
    fn test_bad_host_rejected() {
        let config = ServerConfig {
            host: "not a host".into(),
            port: 8092,
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_server_builds_with_defaults() {
        let server = HttpServer::new(ServerConfig::default(), Settings::default());
        let _router = server.router();
    }
}
