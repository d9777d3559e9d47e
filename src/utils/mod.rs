// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;
pub mod time;
