//! Single-segment routes: date-only task lists and the bare-token redirect.
//!
//! A path like `/2024-05-01` and one like `/alice` are indistinguishable to
//! the router, so one handler family inspects the segment for a date first.
//! With a date, the segment addresses the configured default namespace's
//! list for that day. A dateless `GET` treats the segment as a token and
//! redirects to today's page; dateless mutations are a 404.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use super::tasks;
use crate::date;
use crate::rest::error::ApiError;
use crate::AppContext;

/// `GET /{segment}` — day list when the segment holds a date, otherwise a
/// 302 redirect from the bare token to `/{token}/{today}`.
pub async fn get_day(
    State(ctx): State<Arc<AppContext>>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    if date::extract_date(&segment).is_some() {
        let list = tasks::list_day(&ctx, &ctx.config.default_namespace, &segment).await?;
        return Ok(list.into_response());
    }

    let location = format!("/{}/{}", segment, date::today());
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `POST /{date}`
pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Path(segment): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    tasks::create_in_day(&ctx, &ctx.config.default_namespace, &segment, &body).await
}

/// `PUT /{date}`
pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(segment): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    tasks::update_in_day(&ctx, &ctx.config.default_namespace, &segment, &body).await
}

/// `DELETE /{date}`
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(segment): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    tasks::delete_in_day(&ctx, &ctx.config.default_namespace, &segment, &body).await
}
