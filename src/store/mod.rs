//! Task persistence.
//!
//! Task lists live in an external key-value document store addressed by a
//! `(token, date)` pair. [`FirebaseStore`] talks to the Firebase Realtime
//! Database REST API; [`MemoryStore`] keeps lists in process memory for
//! development and tests.
//!
//! Every mutation is a read-modify-write over the full list for a key.
//! There is no optimistic-concurrency token: two writers racing on the same
//! `(token, date)` key end with whichever write the store observed last.

pub mod firebase;
pub mod memory;

pub use firebase::FirebaseStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single task. Its position in the date's list doubles as its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
}

/// Errors returned by a task store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store returned an unexpected payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Read/write access to per-`(token, date)` task lists.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch the list stored for `(token, date)`. `None` when the key is
    /// absent — the caller decides whether that means an empty list.
    async fn get_tasks(&self, token: &str, date: &str)
        -> Result<Option<Vec<Task>>, StoreError>;

    /// Replace the list stored for `(token, date)` in full.
    async fn set_tasks(&self, token: &str, date: &str, tasks: &[Task])
        -> Result<(), StoreError>;
}
