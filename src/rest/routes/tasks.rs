//! Token-scoped task routes.
//!
//! Every operation validates the date from the path, loads the current list
//! for `(token, date)` from the store (defaulting to empty), applies its
//! mutation, writes the full list back, and responds with
//! `{ "tasks": [...], "date": "..." }`. The read-modify-write sequence is
//! not atomic: concurrent mutations of the same key can lose updates, and
//! the last write observed by the store wins.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::date::extract_date;
use crate::rest::error::ApiError;
use crate::store::Task;
use crate::AppContext;

#[derive(Deserialize)]
pub struct CreateTask {
    pub task: Task,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub id: usize,
    pub task: Task,
}

/// Body of a delete request. The frontend sends either an index or a title.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum DeleteTask {
    ById { id: usize },
    ByTitle { title: String },
}

/// `GET /{token}/{date}`
pub async fn list(
    State(ctx): State<Arc<AppContext>>,
    Path((token, date)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    list_day(&ctx, &token, &date).await
}

/// `POST /{token}/{date}`
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Path((token, date)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    create_in_day(&ctx, &token, &date, &body).await
}

/// `PUT /{token}/{date}`
pub async fn update(
    State(ctx): State<Arc<AppContext>>,
    Path((token, date)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    update_in_day(&ctx, &token, &date, &body).await
}

/// `DELETE /{token}/{date}`
pub async fn delete(
    State(ctx): State<Arc<AppContext>>,
    Path((token, date)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    delete_in_day(&ctx, &token, &date, &body).await
}

// ─── Shared operations (also used by the date-only routes) ────────────────────

pub(crate) async fn list_day(
    ctx: &AppContext,
    token: &str,
    raw_date: &str,
) -> Result<Json<Value>, ApiError> {
    let date = extract_date(raw_date).ok_or(ApiError::InvalidDate)?;
    let tasks = ctx.store.get_tasks(token, &date).await?.unwrap_or_default();
    Ok(day_response(tasks, date))
}

pub(crate) async fn create_in_day(
    ctx: &AppContext,
    token: &str,
    raw_date: &str,
    body: &Bytes,
) -> Result<Json<Value>, ApiError> {
    let date = extract_date(raw_date).ok_or(ApiError::InvalidDate)?;
    let req: CreateTask = parse_body(body)?;

    let mut tasks = ctx.store.get_tasks(token, &date).await?.unwrap_or_default();
    tasks.push(req.task);
    ctx.store.set_tasks(token, &date, &tasks).await?;

    Ok(day_response(tasks, date))
}

pub(crate) async fn update_in_day(
    ctx: &AppContext,
    token: &str,
    raw_date: &str,
    body: &Bytes,
) -> Result<Json<Value>, ApiError> {
    let date = extract_date(raw_date).ok_or(ApiError::InvalidDate)?;
    let req: UpdateTask = parse_body(body)?;

    let mut tasks = ctx.store.get_tasks(token, &date).await?.unwrap_or_default();
    if req.id >= tasks.len() {
        return Err(ApiError::IndexOutOfRange {
            id: req.id,
            len: tasks.len(),
        });
    }
    tasks[req.id] = req.task;
    ctx.store.set_tasks(token, &date, &tasks).await?;

    Ok(day_response(tasks, date))
}

pub(crate) async fn delete_in_day(
    ctx: &AppContext,
    token: &str,
    raw_date: &str,
    body: &Bytes,
) -> Result<Json<Value>, ApiError> {
    let date = extract_date(raw_date).ok_or(ApiError::InvalidDate)?;
    let req: DeleteTask = parse_body(body)?;

    let mut tasks = ctx.store.get_tasks(token, &date).await?.unwrap_or_default();
    match req {
        DeleteTask::ById { id } => {
            if id >= tasks.len() {
                return Err(ApiError::IndexOutOfRange {
                    id,
                    len: tasks.len(),
                });
            }
            tasks.remove(id);
        }
        // No unique key for titles — remove every exact match.
        DeleteTask::ByTitle { title } => tasks.retain(|t| t.title != title),
    }
    ctx.store.set_tasks(token, &date, &tasks).await?;

    Ok(day_response(tasks, date))
}

fn day_response(tasks: Vec<Task>, date: String) -> Json<Value> {
    Json(json!({ "tasks": tasks, "date": date }))
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
