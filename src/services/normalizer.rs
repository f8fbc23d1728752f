use regex::Regex;
use scraper::{Html, Node};
use tracing::debug;

/// Element kinds whose text never renders on a fetched web page, plus
/// footers, which carry boilerplate rather than content.
const WEB_PAGE_EXCLUDED: &[&str] = &["script", "style", "footer"];

/// Element kinds dropped by the generic HTML path.
const HTML_EXCLUDED: &[&str] = &["style", "script", "head", "title", "meta"];

/// Converts raw input into an ordered sequence of text units, one per
/// logical line or paragraph. Source order is always preserved; non-adjacent
/// regions are never merged.
pub struct Normalizer {
    gap_pattern: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            gap_pattern: Regex::new(r" {2,}").unwrap(),
        }
    }

    /// Minimal path: split on newlines. Blank lines are kept as empty units;
    /// callers that need non-empty units enable filtering on the paginator.
    pub fn from_text(&self, content: &str) -> Vec<String> {
        content.split('\n').map(str::to_string).collect()
    }

    /// Web-page path for fetched URLs. Drops `script`, `style`, and `footer`
    /// subtrees, then recovers multi-part headings that render as one text
    /// line with wide gaps: each line is trimmed and split on runs of two or
    /// more spaces, and chunks that survive trimming are rejoined one per
    /// line before going through [`from_text`](Self::from_text).
    pub fn from_web_page(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let text = collect_visible_text(&document, WEB_PAGE_EXCLUDED);

        let mut chunks: Vec<&str> = Vec::new();
        for line in text.split('\n') {
            for chunk in self.gap_pattern.split(line.trim()) {
                let chunk = chunk.trim();
                if !chunk.is_empty() {
                    chunks.push(chunk);
                }
            }
        }

        debug!("Web page normalized into {} chunks", chunks.len());
        self.from_text(&chunks.join("\n"))
    }

    /// Generic path for raw HTML text. Drops non-visible elements, replaces
    /// non-breaking spaces with ordinary ones, and emits one trimmed,
    /// non-empty unit per line. Unlike the plain-text path, the output here
    /// is guaranteed free of empty units.
    pub fn from_html(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        collect_visible_text(&document, HTML_EXCLUDED)
            .replace('\u{a0}', " ")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first text collection that skips excluded element subtrees. Text
/// nodes are concatenated without separators, matching what the markup
/// would render.
fn collect_visible_text(document: &Html, excluded: &[&str]) -> String {
    let mut out = String::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(element) if excluded.contains(&element.name()) => continue,
            Node::Text(text) => out.push_str(text),
            _ => {}
        }

        // Children are pushed in reverse so they pop in document order.
        for child in node.children().rev() {
            stack.push(child);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_keeps_blank_lines() {
        let normalizer = Normalizer::new();
        let units = normalizer.from_text("first\n\nsecond");
        assert_eq!(units, vec!["first", "", "second"]);
    }

    #[test]
    fn test_plain_text_single_line() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.from_text("only line"), vec!["only line"]);
    }

    #[test]
    fn test_web_page_strips_script_style_footer() {
        let html = r#"<html><body>
            <script>ignored</script>
            <style>ignored too</style>
            <p>kept</p>
            <footer>also ignored</footer>
        </body></html>"#;

        let units = Normalizer::new().from_web_page(html);
        assert!(units.contains(&"kept".to_string()));
        assert!(!units.iter().any(|u| u.contains("ignored")));
    }

    #[test]
    fn test_web_page_splits_wide_gaps_into_chunks() {
        let html = "<html><body><h1>Title  Subtitle</h1></body></html>";
        let units = Normalizer::new().from_web_page(html);
        assert_eq!(units, vec!["Title", "Subtitle"]);
    }

    #[test]
    fn test_web_page_drops_blank_lines() {
        let html = "<html><body><p>one</p>\n\n\n<p>two</p></body></html>";
        let units = Normalizer::new().from_web_page(html);
        assert_eq!(units, vec!["one", "two"]);
    }

    #[test]
    fn test_web_page_with_no_visible_text_yields_single_empty_unit() {
        // Joining zero chunks gives an empty blob, and the plain-text path
        // splits that into one empty unit, same as an empty input file.
        let html = "<html><body><script>var x = 1;</script></body></html>";
        let units = Normalizer::new().from_web_page(html);
        assert_eq!(units, vec![""]);
    }

    #[test]
    fn test_html_strips_head_and_drops_empties() {
        let html = r#"<html>
            <head><title>Page title</title><meta charset="utf-8"></head>
            <body>
                <p>visible paragraph</p>
                <script>hidden()</script>
            </body>
        </html>"#;

        let units = Normalizer::new().from_html(html);
        assert_eq!(units, vec!["visible paragraph"]);
    }

    #[test]
    fn test_html_replaces_non_breaking_space() {
        let html = "<html><body><p>a\u{a0}b</p></body></html>";
        let units = Normalizer::new().from_html(html);
        assert_eq!(units, vec!["a b"]);
    }

    #[test]
    fn test_html_output_has_no_empty_units() {
        let html = "<html><body><p>one</p>\n   \n<p>two</p></body></html>";
        let units = Normalizer::new().from_html(html);
        assert!(units.iter().all(|u| !u.trim().is_empty()));
        assert_eq!(units, vec!["one", "two"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        // Permissive parsing: truncated markup still yields whatever text
        // can be recovered instead of failing.
        let html = "<html><body><p>partial <b>content";
        let units = Normalizer::new().from_web_page(html);
        assert_eq!(units, vec!["partial content"]);
    }

    #[test]
    fn test_source_order_is_preserved() {
        let html = "<html><body><p>alpha</p>\n<p>beta</p>\n<p>gamma</p></body></html>";
        let units = Normalizer::new().from_html(html);
        assert_eq!(units, vec!["alpha", "beta", "gamma"]);
    }
}
