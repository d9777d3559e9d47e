// src/services/emoji.rs

//! Cloud emoji retrieval service.
//!
//! Locates a creator's emoji article through the article listing endpoint,
//! then scrapes the article page for name → URL pairs.

use std::collections::HashMap;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};
use crate::models::{ArticleId, EmojiRecord};
use crate::services::parsing;
use crate::utils::http;
use crate::utils::time;

/// Blocking client for the full retrieval pipeline.
///
/// Each call is self-contained and makes sequential requests; no state is
/// shared across calls beyond the HTTP connection pool.
pub struct EmojiClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl EmojiClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = http::create_client(&config)?;
        Ok(Self { config, client })
    }

    /// Create a client with the default platform configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Build the article listing query URL for a uid.
    ///
    /// The query string is reproduced verbatim, including the missing
    /// separator between the cache-buster timestamp and `reqId`.
    fn listing_url(&self, uid: &str) -> String {
        format!(
            "https://{}/u/{}?quickViewId=ac-space-article-list&ajaxpipe=1&type=article&order=newest&page=1&pageSize={}&t={}reqId=1",
            self.config.host,
            uid,
            self.config.page_size,
            time::epoch_millis(),
        )
    }

    fn article_url(&self, article: &ArticleId) -> String {
        format!("https://{}/a/{}", self.config.host, article)
    }

    /// Locate the id of the user's emoji article.
    ///
    /// Fails with [`AppError::UserNotFound`] when the platform serves its
    /// generic error page, and [`AppError::NoEmojiArticle`] when no listed
    /// article link carries the livestream-emoji title marker.
    pub fn locate_emoji_article(&self, uid: &str) -> Result<ArticleId> {
        if uid.is_empty() {
            return Err(AppError::invalid_input("uid cannot be empty"));
        }

        let url = self.listing_url(uid);
        let body = http::fetch_text(&self.client, &url)?;
        Self::resolve_listing(uid, &body)
    }

    /// Map a raw listing response body to the located article id.
    fn resolve_listing(uid: &str, body: &str) -> Result<ArticleId> {
        let body = parsing::strip_block_comments(body);

        if parsing::is_error_page(&body) {
            return Err(AppError::UserNotFound(uid.to_string()));
        }

        let listing = parsing::listing_html(&body)?;
        let candidate = parsing::find_emoji_article(&listing)
            .ok_or_else(|| AppError::NoEmojiArticle(uid.to_string()))?;

        // Unreachable if the href pattern is right, but the id crosses a
        // component boundary and gets re-checked.
        let article = ArticleId::parse(candidate)?;
        log::info!("Located emoji article {article} for uid {uid}");
        Ok(article)
    }

    /// Extract the raw (unbracketed) name → URL map from an emoji article.
    pub fn extract_emotions(&self, article: &ArticleId) -> Result<HashMap<String, String>> {
        let url = self.article_url(article);
        let body = http::fetch_text(&self.client, &url)?;
        let fragment = parsing::extract_content_field(&body)?;
        let emotions = parsing::scan_emotions(fragment);
        log::debug!("Extracted {} emotions from {article}", emotions.len());
        Ok(emotions)
    }

    /// Locate the emoji article for a uid and extract its raw emoji map.
    pub fn emotions(&self, uid: &str) -> Result<HashMap<String, String>> {
        let article = self.locate_emoji_article(uid)?;
        self.extract_emotions(&article)
    }

    /// Fetch a uid's emoji set as a normalized record.
    pub fn fetch_record(&self, uid: &str) -> Result<EmojiRecord> {
        let raw = self.emotions(uid)?;
        Ok(EmojiRecord::from_raw(uid, raw))
    }

    /// Fetch a uid's emoji set as a normalized JSON string.
    pub fn fetch_json(&self, uid: &str) -> Result<String> {
        self.fetch_record(uid)?.to_json()
    }
}
