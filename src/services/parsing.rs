// src/services/parsing.rs

//! Text-level extraction from the platform's HTML/JSON-hybrid pages.
//!
//! The article listing endpoint answers with either a JSON envelope (wrapped
//! in `/*...*/` comment noise) or a raw HTML error page; the article page
//! embeds its body as a JSON-string-escaped `content` field inside a script
//! blob. Everything here is pure text-in/value-out so it can be tested against
//! recorded fixtures without a network.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Literal title of the platform's generic error page.
pub const ERROR_PAGE_MARKER: &str = "<title>出错啦！";

/// Marker substring in the title of a qualifying emoji article link.
pub const EMOJI_ARTICLE_MARKER: &str = "直播间表情";

static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("Failed to compile block comment regex"));

static ARTICLE_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/a/(ac\d+)$").expect("Failed to compile article href regex"));

// Greedy capture up to the final `"}],` — the content field is the last entry
// of the embedded array, and a full JSON parse of the surrounding blob is not
// worth the escaping round-trip for this one field.
static CONTENT_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""content":\s*"(.*)"\}\],"#).expect("Failed to compile content field regex")
});

// `[name]` bound lazily to the nearest following img tag. Quotes around the
// src value are backslash-escaped because the fragment is itself a JSON
// string.
static EMOTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[(.*?)\].*?<img[^>]*\s+src=\\["']([^"']+)\\["']"#)
        .expect("Failed to compile emotion regex")
});

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href][title]").expect("Failed to parse anchor selector"));

/// Remove `/*...*/` block comments from a response body.
///
/// The listing endpoint pads its JSON with comment-delimited noise that breaks
/// naive matching, so this runs before any other inspection.
pub fn strip_block_comments(body: &str) -> Cow<'_, str> {
    BLOCK_COMMENT_RE.replace_all(body, "")
}

/// Whether a (comment-stripped) body is the platform's generic error page.
pub fn is_error_page(body: &str) -> bool {
    body.contains(ERROR_PAGE_MARKER)
}

/// Extract the `html` fragment from the listing JSON envelope.
pub fn listing_html(body: &str) -> Result<String> {
    let envelope: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AppError::parsing(format!("articles listing is not valid JSON: {e}")))?;

    envelope
        .get("html")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::parsing(
                "no html field in articles listing response, or html field is not a string",
            )
        })
}

/// Find the first linked emoji article in a listing HTML fragment.
///
/// Scans anchors in document order for an `href` of the exact shape
/// `/a/ac<digits>` whose `title` contains [`EMOJI_ARTICLE_MARKER`]; the first
/// match wins. The listing is ordered newest-first, so that is the most recent
/// qualifying article.
pub fn find_emoji_article(fragment: &str) -> Option<String> {
    let document = Html::parse_fragment(fragment);

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let element = anchor.value();
        let Some(href) = element.attr("href") else {
            continue;
        };
        let Some(captures) = ARTICLE_HREF_RE.captures(href) else {
            continue;
        };
        if element
            .attr("title")
            .is_some_and(|title| title.contains(EMOJI_ARTICLE_MARKER))
        {
            return Some(captures[1].to_string());
        }
    }
    None
}

/// Extract the raw escaped-HTML `content` field from an article page body.
pub fn extract_content_field(page: &str) -> Result<&str> {
    CONTENT_FIELD_RE
        .captures(page)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str())
        .ok_or_else(|| AppError::parsing("cannot find content field in article page"))
}

/// Collect `[name]` → image URL pairs from an escaped content fragment.
///
/// Matches are non-overlapping; duplicate names overwrite (last wins). Zero
/// matches is a valid, empty result.
pub fn scan_emotions(fragment: &str) -> HashMap<String, String> {
    let mut emotions = HashMap::new();
    for captures in EMOTION_RE.captures_iter(fragment) {
        emotions.insert(captures[1].to_string(), captures[2].to_string());
    }
    emotions
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_BODY: &str = r##"/*<!-- fetch-stream -->*/{"html":"<div class=\"ac-space-article-list\"><a href=\"/a/ac40000001\" title=\"近况随笔\" target=\"_blank\">近况随笔</a><a href=\"/a/ac47756774\" title=\"【直播间表情】特里羊羊表情包\" target=\"_blank\">表情包</a><a href=\"/a/ac40000002\" title=\"旧的直播间表情存档\" target=\"_blank\">存档</a></div>"}/*<!-- fetch-stream -->*/"##;

    const ERROR_PAGE_BODY: &str = "<!DOCTYPE html><html><head><title>出错啦！ - AcFun弹幕视频网</title></head><body>页面不存在</body></html>";

    const ARTICLE_PAGE: &str = r##"window.pageInfo = window.__INITIAL_STATE__ = {"articleList":[{"title":"【直播间表情】","content":"<p>[蛇年AC娘_威胁]<\/p><p><img src=\"https://imgs.aixifan.com/threat.png\" alt=\"\"><\/p><p>[蛇年AC娘_亲亲]<\/p><p><img class=\"emoji\" src=\"https://imgs.aixifan.com/kiss.png\"><\/p>"}],"channel":{}};"##;

    #[test]
    fn test_strip_block_comments() {
        assert_eq!(strip_block_comments("a/*x*/b/*y*/c"), "abc");
        assert_eq!(strip_block_comments("no comments"), "no comments");
        // Non-greedy: two comments, not one spanning match.
        assert_eq!(strip_block_comments("/*a*/keep/*b*/"), "keep");
    }

    #[test]
    fn test_is_error_page() {
        assert!(is_error_page(ERROR_PAGE_BODY));
        assert!(!is_error_page(LISTING_BODY));
    }

    #[test]
    fn test_listing_html_success() {
        let stripped = strip_block_comments(LISTING_BODY);
        let html = listing_html(&stripped).unwrap();
        assert!(html.contains("ac-space-article-list"));
    }

    #[test]
    fn test_listing_html_rejects_bad_envelopes() {
        assert!(matches!(
            listing_html("<html>not json</html>"),
            Err(AppError::Parsing(_))
        ));
        assert!(matches!(
            listing_html(r#"{"other": 1}"#),
            Err(AppError::Parsing(_))
        ));
        assert!(matches!(
            listing_html(r#"{"html": 42}"#),
            Err(AppError::Parsing(_))
        ));
    }

    #[test]
    fn test_find_emoji_article_first_match_wins() {
        let stripped = strip_block_comments(LISTING_BODY);
        let html = listing_html(&stripped).unwrap();
        // ac40000001 has no marker in its title; ac47756774 is the first hit
        // even though ac40000002 also mentions the marker.
        assert_eq!(find_emoji_article(&html).as_deref(), Some("ac47756774"));
    }

    #[test]
    fn test_find_emoji_article_requires_both_attributes() {
        // Marker title but href is not an article link.
        let html = r#"<a href="/u/123" title="直播间表情合集">x</a>"#;
        assert_eq!(find_emoji_article(html), None);

        // Article href but no title attribute at all.
        let html = r#"<a href="/a/ac123">直播间表情</a>"#;
        assert_eq!(find_emoji_article(html), None);

        assert_eq!(find_emoji_article("<div>no anchors</div>"), None);
    }

    #[test]
    fn test_extract_content_field() {
        let fragment = extract_content_field(ARTICLE_PAGE).unwrap();
        assert!(fragment.starts_with("<p>[蛇年AC娘_威胁]"));
        assert!(fragment.ends_with(r#"src=\"https://imgs.aixifan.com/kiss.png\"><\/p>"#));
    }

    #[test]
    fn test_extract_content_field_missing() {
        let err = extract_content_field("<html>plain page, no embedded state</html>").unwrap_err();
        assert!(matches!(err, AppError::Parsing(_)));
    }

    #[test]
    fn test_scan_emotions() {
        let fragment = extract_content_field(ARTICLE_PAGE).unwrap();
        let emotions = scan_emotions(fragment);
        assert_eq!(emotions.len(), 2);
        assert_eq!(
            emotions.get("蛇年AC娘_威胁").map(String::as_str),
            Some("https://imgs.aixifan.com/threat.png")
        );
        assert_eq!(
            emotions.get("蛇年AC娘_亲亲").map(String::as_str),
            Some("https://imgs.aixifan.com/kiss.png")
        );
    }

    #[test]
    fn test_scan_emotions_is_deterministic() {
        let fragment = extract_content_field(ARTICLE_PAGE).unwrap();
        assert_eq!(scan_emotions(fragment), scan_emotions(fragment));
    }

    #[test]
    fn test_scan_emotions_binds_nearest_image() {
        // Lazy in-between: the name must pair with the first following img,
        // not a later one.
        let fragment = r#"[near]<span><\/span><img src=\"https://x/1.png\"><img src=\"https://x/2.png\">"#;
        let emotions = scan_emotions(fragment);
        assert_eq!(
            emotions.get("near").map(String::as_str),
            Some("https://x/1.png")
        );
    }

    #[test]
    fn test_scan_emotions_duplicate_name_last_wins() {
        let fragment =
            r#"[dup]<img src=\"https://x/old.png\">[dup]<img src=\"https://x/new.png\">"#;
        let emotions = scan_emotions(fragment);
        assert_eq!(emotions.len(), 1);
        assert_eq!(
            emotions.get("dup").map(String::as_str),
            Some("https://x/new.png")
        );
    }

    #[test]
    fn test_scan_emotions_empty_fragment() {
        assert!(scan_emotions("<p>An article without any emoji at all<\\/p>").is_empty());
        assert!(scan_emotions("").is_empty());
    }
}
