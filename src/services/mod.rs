// src/services/mod.rs

//! Emoji retrieval services.

pub mod emoji;
pub mod parsing;

pub use emoji::EmojiClient;
