//! Server-rendered pages for the marketing site and the allocation lookup.

pub mod landing;
pub mod layout;
pub mod lookup_page;
pub mod not_found;

pub use landing::render_landing;
pub use layout::{Page, ALLOCATION_PAGE, LANDING_PAGE, NOT_FOUND_PAGE};
pub use lookup_page::{render_lookup_form, render_lookup_result};
pub use not_found::render_not_found;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
