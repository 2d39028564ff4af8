//! HTTP server wiring for SeqPaste (API, handlers, and shared state).

/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for paste endpoints.
pub mod handlers;

pub use seqpaste_core::{
    config, db, models, service, AppError, Config, Database, ErrorKind, PasteService,
    ValidationError, DEFAULT_PORT,
};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: PasteService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `db`: Open, initialized database handle.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            service: PasteService::new(Arc::new(db)),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors_port = state.config.port;
    create_app_with_cors_port(state, allow_public_access, cors_port)
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    resolve_bind_address_from(
        std::env::var("BIND").ok().as_deref(),
        config.port,
        allow_public_access,
    )
}

fn resolve_bind_address_from(
    bind: Option<&str>,
    port: u16,
    allow_public_access: bool,
) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], port));
    let requested = match bind {
        Some(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        None => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

fn cors_layer(allow_public_access: bool, cors_port: u16) -> CorsLayer {
    let methods = [Method::GET, Method::POST];
    if allow_public_access {
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any);
    }

    let origins: Vec<HeaderValue> = [
        format!("http://localhost:{}", cors_port),
        format!("http://127.0.0.1:{}", cors_port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

fn create_app_with_cors_port(state: AppState, allow_public_access: bool, cors_port: u16) -> Router {
    let max_body = state.config.max_paste_size;

    Router::new()
        .route("/paste", post(handlers::paste::create_paste))
        .route("/paste/:id", get(handlers::paste::get_paste))
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(allow_public_access, cors_port))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

fn listener_cors_port(listener: &tokio::net::TcpListener, fallback_port: u16) -> u16 {
    listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(fallback_port)
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any origin.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let cors_port = listener_cors_port(&listener, state.config.port);
    let app = create_app_with_cors_port(state, allow_public_access, cors_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::{listener_cors_port, resolve_bind_address_from};
    use seqpaste_core::DEFAULT_PORT;
    use std::net::SocketAddr;

    #[tokio::test]
    async fn listener_cors_port_uses_bound_listener_port() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener");
        let expected = listener.local_addr().expect("listener addr").port();
        let resolved = listener_cors_port(&listener, DEFAULT_PORT);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn bind_address_enforces_loopback_when_public_access_disabled() {
        let resolved = resolve_bind_address_from(Some("0.0.0.0:4040"), 4040, false);
        assert_eq!(resolved, SocketAddr::from(([127, 0, 0, 1], 4040)));
    }

    #[test]
    fn bind_address_allows_public_bind_when_enabled() {
        let resolved = resolve_bind_address_from(Some("0.0.0.0:4040"), 4040, true);
        assert_eq!(resolved, SocketAddr::from(([0, 0, 0, 0], 4040)));
    }

    #[test]
    fn bind_address_falls_back_on_missing_or_invalid_value() {
        assert_eq!(
            resolve_bind_address_from(None, 4041, false),
            SocketAddr::from(([127, 0, 0, 1], 4041))
        );
        assert_eq!(
            resolve_bind_address_from(Some("bad:host"), 4041, false),
            SocketAddr::from(([127, 0, 0, 1], 4041))
        );
    }
}
