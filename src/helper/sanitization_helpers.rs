use ammonia::Builder;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern"))
}

/// Accepts `#RGB` and `#RRGGBB`.
pub fn is_valid_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Splits on commas, trims, drops empty tags and removes case-insensitive
/// duplicates, keeping the first spelling.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Renders generated copy (which uses `**bold**` headings and `-` lists) to HTML
/// and cleans the result down to a small set of formatting tags.
pub fn markdown_to_safe_html(markdown_input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown_input, options);
    let mut unsafe_html = String::new();
    html::push_html(&mut unsafe_html, parser);

    let tags_to_allow: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "b", "strong", "i", "em", "p", "br", "a", "ul", "ol", "li",
        "blockquote", "code", "pre", "hr", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    Builder::new()
        .tags(tags_to_allow)
        .generic_attributes(HashSet::from(["title"]))
        .link_rel(Some("nofollow noopener"))
        .clean(&unsafe_html)
        .to_string()
}

/// Wraps sanitized body HTML in a minimal standalone document.
pub fn html_document(title: &str, body_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape::encode_text(title),
        body_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_valid_hex_color("#1E3A8A"));
        assert!(is_valid_hex_color("#fff"));
        assert!(!is_valid_hex_color("1E3A8A"));
        assert!(!is_valid_hex_color("#12345"));
        assert!(!is_valid_hex_color("#GGGGGG"));
        assert!(!is_valid_hex_color("#1E3A8A "));
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let tags = vec![
            " Unity ".to_string(),
            "unity".to_string(),
            "".to_string(),
            "Jobs, Economy".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), vec!["Unity", "Jobs", "Economy"]);
    }

    #[test]
    fn trailing_comma_does_not_hide_a_duplicate() {
        let tags = vec!["Jobs,".to_string(), "Jobs".to_string(), " jobs , Water,".to_string()];
        assert_eq!(normalize_tags(&tags), vec!["Jobs", "Water"]);
    }

    #[test]
    fn scripts_are_removed_from_rendered_html() {
        let html = markdown_to_safe_html("**HEADLINE**\n\n<script>alert(1)</script>\n\n- one\n- two");
        assert!(html.contains("<strong>HEADLINE</strong>"));
        assert!(html.contains("<li>one</li>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn document_title_is_escaped() {
        let doc = html_document("Q&A <night>", "<p>hi</p>\n");
        assert!(doc.contains("<title>Q&amp;A &lt;night&gt;</title>"));
        assert!(doc.contains("<p>hi</p>"));
    }
}
