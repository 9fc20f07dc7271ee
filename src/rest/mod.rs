// rest/mod.rs — HTTP surface of the daylist server.
//
// Routes:
//   GET    /health
//   GET    /{segment}        date in segment ⇒ shared-namespace list, else 302 to /{token}/{today}
//   POST   /{date}           append a task (shared namespace)
//   PUT    /{date}           replace a task by id (shared namespace)
//   DELETE /{date}           remove a task by id or title (shared namespace)
//   GET    /{token}/{date}   list tasks for one day
//   POST   /{token}/{date}   append a task
//   PUT    /{token}/{date}   replace a task by id
//   DELETE /{token}/{date}   remove a task by id or title

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("daylist listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/{segment}",
            get(routes::days::get_day)
                .post(routes::days::create_task)
                .put(routes::days::update_task)
                .delete(routes::days::delete_task),
        )
        .route(
            "/{token}/{date}",
            get(routes::tasks::list)
                .post(routes::tasks::create)
                .put(routes::tasks::update)
                .delete(routes::tasks::delete),
        )
        // The task list is driven by a browser frontend on another origin.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
