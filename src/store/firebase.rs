//! Firebase Realtime Database adapter.
//!
//! Lists are stored under `tasks/{token}/{date}` and read or replaced whole
//! through the RTDB REST API: `GET`/`PUT` against
//! `{database_url}/tasks/{token}/{date}.json`, with the database secret
//! passed as the `auth` query parameter when one is configured. An absent
//! key reads back as JSON `null`.

use async_trait::async_trait;
use reqwest::Client;

use super::{StoreError, Task, TaskStore};

pub struct FirebaseStore {
    client: Client,
    database_url: String,
    secret: Option<String>,
}

impl FirebaseStore {
    pub fn new(database_url: &str, secret: Option<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            database_url: database_url.trim_end_matches('/').to_string(),
            secret,
        })
    }

    fn key_url(&self, token: &str, date: &str) -> String {
        let mut url = format!("{}/tasks/{token}/{date}.json", self.database_url);
        if let Some(secret) = &self.secret {
            url.push_str("?auth=");
            url.push_str(secret);
        }
        url
    }
}

#[async_trait]
impl TaskStore for FirebaseStore {
    async fn get_tasks(
        &self,
        token: &str,
        date: &str,
    ) -> Result<Option<Vec<Task>>, StoreError> {
        let resp = self
            .client
            .get(self.key_url(token, date))
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn set_tasks(
        &self,
        token: &str,
        date: &str,
        tasks: &[Task],
    ) -> Result<(), StoreError> {
        self.client
            .put(self.key_url(token, date))
            .json(&tasks)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
