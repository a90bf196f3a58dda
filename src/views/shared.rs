use comrak::{ComrakOptions, markdown_to_html as render_markdown};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
});

/// Render an analyst reply. Raw HTML in the reply is escaped.
pub fn markdown_to_html(md: &str) -> String {
    render_markdown(md, &MARKDOWN_OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lists() {
        let html = markdown_to_html("Call:\n\n- 999\n- 112");
        assert!(html.contains("<li>999</li>"));
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
