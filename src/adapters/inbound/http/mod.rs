//! HTTP entry point for the bootcamp service
//!
//! Routes:
//! - `POST /bootcamps` registers a bootcamp (201)
//! - `GET /bootcamps` lists a page of enriched bootcamps
//! - `GET /bootcamps/{id}` looks up one bootcamp (404 when absent)

mod api_response;
mod handlers;

pub use api_response::{ApiError, ApiResponse, ErrorDto, MESSAGE_ID_HEADER};
pub use handlers::{PageResponse, SharedService};

use crate::shared::Result;
use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// Builds the router over any implementation of the inbound port
pub fn routes(service: SharedService) -> Router {
    Router::new()
        .route(
            "/bootcamps",
            post(handlers::create_bootcamp).get(handlers::list_bootcamps),
        )
        .route("/bootcamps/{id}", get(handlers::get_bootcamp))
        .with_state(service)
}

/// Serves `service` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, service: SharedService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    tracing::info!(%local_addr, "listening");

    axum::serve(listener, routes(service))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}
