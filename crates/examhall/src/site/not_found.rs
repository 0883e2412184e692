use super::escape_html;
use super::layout::{render_document, NOT_FOUND_PAGE};

pub fn render_not_found(path: &str) -> String {
    let body = format!(
        r#"<section class="glass-card not-found"><h1>404</h1><p>Oops! <code>{}</code> is not a page on this site.</p><a href="/" class="btn-hero">Return to Home</a></section>"#,
        escape_html(path)
    );
    render_document(&NOT_FOUND_PAGE, &body)
}
