//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML.
///
/// Real-world READMEs lean on tables, task lists, and strikethrough, so those
/// extensions are always enabled.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_markdown("# Hello\n\nWorld");

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn renders_tables() {
        let md = "| Model | Accuracy |\n|-------|----------|\n| LeNet-5 | 72.75% |";
        let html = render_markdown(md);

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>LeNet-5</td>"));
    }

    #[test]
    fn renders_lists_emphasis_links_and_images() {
        let md = "- item **bold**\n\n[link](https://example.com) ![img](https://example.com/a.png)";
        let html = render_markdown(md);

        assert!(html.contains("<li>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"<a href="https://example.com">link</a>"#));
        assert!(html.contains(r#"<img src="https://example.com/a.png""#));
    }
}
