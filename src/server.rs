//! HTTP server: Leptos routes, static assets and response compression

use std::net::SocketAddr;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, shell};
use crate::core::config::Config;

/// Server start-up failures
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    ConfigError(String),

    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    ServeError(#[from] std::io::Error),
}

/// Static file service for the compiled bundle
fn pkg_service(pkg_dir: String, precompressed: bool) -> ServeDir {
    let service = ServeDir::new(pkg_dir);
    if precompressed {
        // Serves .br (brotli) and .gz (gzip) siblings when the client accepts them
        service.precompressed_br().precompressed_gzip()
    } else {
        service
    }
}

/// Build the application router
pub fn router(leptos_options: LeptosOptions, config: &Config) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = format!(
        "{}/{}",
        leptos_options.site_root, leptos_options.site_pkg_dir
    );
    let pkg_path = format!("/{}", leptos_options.site_pkg_dir);

    Router::new()
        .nest_service(&pkg_path, pkg_service(pkg_dir, config.precompressed_assets))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        // Brotli first, gzip as the widely supported fallback
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
}

/// Load the Leptos configuration, bind and serve until the process stops
pub async fn serve(config: Config) -> Result<(), ServerError> {
    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf =
        get_configuration(None).map_err(|err| ServerError::ConfigError(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = router(leptos_options, &config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::BindError { addr, source })?;

    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
