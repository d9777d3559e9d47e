// src/models/article.rs

//! Validated article identifier.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};

static ARTICLE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ac\d+$").expect("Failed to compile article id regex"));

/// An article identifier of the form `ac` followed by digits.
///
/// Only constructible through [`ArticleId::parse`], so any value crossing the
/// locator → extractor boundary already satisfies the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    /// Validate a candidate string and wrap it.
    pub fn parse(candidate: impl Into<String>) -> Result<Self> {
        let candidate = candidate.into();
        if !ARTICLE_ID_RE.is_match(&candidate) {
            return Err(AppError::parsing(format!(
                "extracted article id is not valid: {candidate}"
            )));
        }
        Ok(Self(candidate))
    }

    /// The raw id, e.g. `ac47756774`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
