//! In-memory task store.
//!
//! Used when no database URL is configured and by the integration tests.
//! Contents do not survive a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, Task, TaskStore};

#[derive(Default)]
pub struct MemoryStore {
    lists: RwLock<HashMap<(String, String), Vec<Task>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn get_tasks(
        &self,
        token: &str,
        date: &str,
    ) -> Result<Option<Vec<Task>>, StoreError> {
        let key = (token.to_string(), date.to_string());
        Ok(self.lists.read().await.get(&key).cloned())
    }

    async fn set_tasks(
        &self,
        token: &str,
        date: &str,
        tasks: &[Task],
    ) -> Result<(), StoreError> {
        let key = (token.to_string(), date.to_string());
        self.lists.write().await.insert(key, tasks.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        let tasks = store.get_tasks("alice", "2024-05-01").await.unwrap();
        assert!(tasks.is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        let tasks = vec![Task {
            title: "water the plants".to_string(),
        }];
        store.set_tasks("alice", "2024-05-01", &tasks).await.unwrap();

        let read = store.get_tasks("alice", "2024-05-01").await.unwrap();
        assert_eq!(read, Some(tasks));
    }

    #[tokio::test]
    async fn keys_are_scoped_by_token_and_date() {
        let store = MemoryStore::new();
        let tasks = vec![Task {
            title: "only for alice".to_string(),
        }];
        store.set_tasks("alice", "2024-05-01", &tasks).await.unwrap();

        assert!(store.get_tasks("bob", "2024-05-01").await.unwrap().is_none());
        assert!(store.get_tasks("alice", "2024-05-02").await.unwrap().is_none());
    }
}
