//! Pattern-based HTML minification.
//!
//! Every pass is a plain `&str -> String` rewrite and [`optimize_html`] runs
//! them in a fixed order. There is no parser behind this: string literals in
//! inline CSS or JavaScript that contain braces, `//` or comment markers can be
//! mangled.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<style[^>]*>)(.*?)</style>").unwrap());
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<script[^>]*>)(.*?)</script>").unwrap());

static CSS_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static CSS_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,])\s*").unwrap());
static CSS_TRAILING_SEMICOLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*\}").unwrap());

// `//` 前一個字元若是雙引號就保留，例如 "//cdn.example.com"
static JS_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^|[^"])//[^\n]*"#).unwrap());
static JS_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([=+\-*/%<>!&|])\s*").unwrap());
static JS_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}();,:])\s*").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static TAG_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static LINE_EDGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+|\s+$").unwrap());
static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^<>])\s{2,}([^<>])").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const CONDITIONAL_MARKER: &str = "[if";

/// Runs every pass in order.
pub fn optimize_html(html: &str) -> String {
    let html = minify_styles(html);
    let html = minify_scripts(&html);
    let html = strip_comments(&html);
    let html = strip_tag_whitespace(&html);
    let html = collapse_text_runs(&html);
    strip_blank_lines(&html)
}

pub fn minify_styles(html: &str) -> String {
    STYLE_BLOCK
        .replace_all(html, |caps: &Captures| {
            format!("{}{}</style>", &caps[1], minify_css(&caps[2]))
        })
        .into_owned()
}

pub fn minify_css(css: &str) -> String {
    let css = CSS_COMMENT.replace_all(css, "");
    let css = CSS_PUNCTUATION.replace_all(&css, "${1}");
    let css = CSS_TRAILING_SEMICOLON.replace_all(&css, "}");
    let css = WHITESPACE_RUN.replace_all(&css, " ");
    css.trim().to_string()
}

pub fn minify_scripts(html: &str) -> String {
    SCRIPT_BLOCK
        .replace_all(html, |caps: &Captures| {
            format!("{}{}</script>", &caps[1], minify_js(&caps[2]))
        })
        .into_owned()
}

pub fn minify_js(js: &str) -> String {
    let js = strip_js_line_comments(js);
    let js = JS_OPERATOR.replace_all(&js, " ${1} ");
    let js = JS_PUNCTUATION.replace_all(&js, "${1}");
    let js = WHITESPACE_RUN.replace_all(&js, " ");
    js.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn strip_js_line_comments(js: &str) -> String {
    JS_LINE_COMMENT.replace_all(js, "${1}").into_owned()
}

/// Removes `<!-- ... -->` comments but keeps conditional comments
/// (`<!--[if ...]>`) untouched.
pub fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(COMMENT_OPEN) {
        let body = &rest[start + COMMENT_OPEN.len()..];
        if body.starts_with(CONDITIONAL_MARKER) {
            out.push_str(&rest[..start + COMMENT_OPEN.len()]);
            rest = body;
            continue;
        }
        match body.find(COMMENT_CLOSE) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &body[end + COMMENT_CLOSE.len()..];
            }
            // 沒有結尾的註解保持原樣
            None => break,
        }
    }

    out.push_str(rest);
    out
}

pub fn strip_tag_whitespace(html: &str) -> String {
    let html = TAG_GAP.replace_all(html, "><");
    LINE_EDGE.replace_all(&html, "").into_owned()
}

pub fn collapse_text_runs(html: &str) -> String {
    TEXT_RUN.replace_all(html, "${1} ${2}").into_owned()
}

pub fn strip_blank_lines(html: &str) -> String {
    BLANK_LINES.replace_all(html, "\n").into_owned()
}
