//! Post-processing of provider text into safe HTML

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Tags kept by [`sanitize_html`]; everything else is dropped
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "ul", "ol", "li", "strong", "b", "em", "i", "h3", "h4", "div", "br",
];

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)[^>]*>").expect("valid regex"));
static UNTERMINATED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*/?\s*[a-zA-Z][^>]*$").expect("valid regex"));
static KEPT_TAG_OR_LT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"</?(?:{})>|<", ALLOWED_TAGS.join("|"))).expect("valid regex")
});
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("valid regex"));

/// Text that already looks like HTML passes through; plain text gets
/// paragraphs, line breaks and markdown emphasis converted
pub fn format_workout_response(text: &str) -> String {
    if text.contains("<h3>") || text.contains("<div>") {
        return text.to_string();
    }

    let html = text
        .trim()
        .replace("\r\n", "\n")
        .replace("\n\n", "</p><p>")
        .replace('\n', "<br>");
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    format!("<p>{}</p>", html)
}

/// Keep only [`ALLOWED_TAGS`], without attributes. A tag cut off at the
/// end is dropped and any other stray `<` is escaped.
pub fn sanitize_html(html: &str) -> String {
    let kept = TAG.replace_all(html, |caps: &Captures| {
        let name = caps[2].to_ascii_lowercase();
        if ALLOWED_TAGS.contains(&name.as_str()) {
            format!("<{}{}>", &caps[1], name)
        } else {
            String::new()
        }
    });
    let kept = UNTERMINATED_TAG.replace(&kept, "");
    KEPT_TAG_OR_LT
        .replace_all(&kept, |caps: &Captures| {
            if &caps[0] == "<" { "&lt;".to_string() } else { caps[0].to_string() }
        })
        .into_owned()
}

/// Plain-text view of HTML content (dashboard detail pane)
pub fn strip_tags(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n")
        .replace("</li>", "\n")
        .replace("<li>", "- ");
    let text = ANY_TAG.replace_all(&text, "");
    let text = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_LINES.replace_all(text.trim(), "\n\n").into_owned()
}
