// src/models/mod.rs

//! Data structures for the cloud emoji pipeline.

pub mod article;
pub mod record;

pub use article::ArticleId;
pub use record::EmojiRecord;
