//! Markdown rendering for bot messages.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// URL schemes a rendered link or image may point at. Relative URLs carry no
/// scheme and are always allowed.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render `markdown` to HTML for a bot message bubble.
///
/// Raw HTML is dropped and link or image destinations with any other scheme
/// (`javascript:`, `data:`, ...) are blanked, so model output cannot inject
/// markup or script. Single newlines become `<br>` because the canned texts
/// use them as line breaks.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: safe_url(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: safe_url(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("") }
}

/// Whether `url` is relative or uses one of [`ALLOWED_SCHEMES`].
///
/// A colon only starts a scheme if it comes before any `/`, `?` or `#`.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find([':', '/', '?', '#']);
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = &url[..i];
            ALLOWED_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        }
        _ => true,
    }
}
