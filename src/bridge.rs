// src/bridge.rs

//! Async bridge over the blocking pipeline.
//!
//! For callers with a single-threaded foreground loop (a UI thread, a
//! current-thread runtime) that must not block: the pipeline runs on a
//! background runtime's blocking pool, and the caller observes completion on
//! its own task context when the await resumes. Each bridge instance carries
//! its own executor binding, so independent configurations can coexist.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::error::Result;
use crate::models::{ArticleId, EmojiRecord};
use crate::services::EmojiClient;

/// Asynchronous facade over [`EmojiClient`].
#[derive(Clone)]
pub struct AsyncEmojiClient {
    client: Arc<EmojiClient>,
    background: Handle,
}

impl AsyncEmojiClient {
    /// Bind a blocking client to the runtime whose blocking pool will carry
    /// the network work.
    pub fn new(client: Arc<EmojiClient>, background: Handle) -> Self {
        Self { client, background }
    }

    /// Locate the id of a user's emoji article, off the calling context.
    pub async fn locate_emoji_article(&self, uid: &str) -> Result<ArticleId> {
        let uid = uid.to_string();
        self.offload(move |client| client.locate_emoji_article(&uid))
            .await
    }

    /// Fetch a uid's raw emoji map, off the calling context.
    pub async fn emotions(&self, uid: &str) -> Result<HashMap<String, String>> {
        let uid = uid.to_string();
        self.offload(move |client| client.emotions(&uid)).await
    }

    /// Fetch a uid's emoji set as a normalized record, off the calling context.
    pub async fn fetch_record(&self, uid: &str) -> Result<EmojiRecord> {
        let uid = uid.to_string();
        self.offload(move |client| client.fetch_record(&uid)).await
    }

    /// Fetch a uid's emoji set as a normalized JSON string, off the calling
    /// context.
    pub async fn fetch_json(&self, uid: &str) -> Result<String> {
        let uid = uid.to_string();
        self.offload(move |client| client.fetch_json(&uid)).await
    }

    /// Run a blocking job on the background pool and resume here with its
    /// result. Pipeline errors pass through unchanged; a panic in the job is
    /// a programming error and is resumed on the caller.
    async fn offload<T, F>(&self, job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&EmojiClient) -> Result<T> + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let task = self.background.spawn_blocking(move || job(&client));

        match task.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_panic() => {
                std::panic::resume_unwind(join_error.into_panic())
            }
            Err(join_error) => panic!("background task was cancelled: {join_error}"),
        }
    }
}
