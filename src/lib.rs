// src/lib.rs

//! AcFun Cloud Emoji SDK
//!
//! Retrieves a creator's published cloud emoji set by scraping the platform's
//! article listing and article pages, and packages the name → URL mapping into
//! a normalized record for downstream chat clients.

pub mod bridge;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use bridge::AsyncEmojiClient;
pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use models::{ArticleId, EmojiRecord};
pub use services::EmojiClient;
