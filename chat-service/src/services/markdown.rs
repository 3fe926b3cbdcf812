//! Minimal Markdown-to-HTML rendering for chat replies.
//!
//! Handles the fixed subset the chat page displays: bold, italic, links,
//! `##` headings, `*` list items, and line breaks. Implemented as an ordered
//! substitution pipeline, not a parser; rule order is part of the behavior
//! (bold must run before italic, item detection before the list wrap).

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("link pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*## (.*)$").expect("heading pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\* (.*)$").expect("list item pattern"));

/// Render a reply to an HTML fragment. Pure and total: unmatched syntax is
/// left as literal text.
pub fn render_markdown(text: &str) -> String {
    let html = BOLD.replace_all(text, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = LINK.replace_all(&html, r#"<a href="${2}" target="_blank">${1}</a>"#);
    let html = HEADING.replace_all(&html, "<h3>${1}</h3>");
    let html = LIST_ITEM.replace_all(&html, "<li>${1}</li>");

    // Known quirk: one wrapper around the whole message as soon as any item
    // matched, so separate list blocks merge and surrounding prose lands
    // inside the wrapper.
    let html = if html.contains("<li>") {
        format!("<ul>{}</ul>", html)
    } else {
        html.into_owned()
    };

    // Break conversion runs last so the line-anchored rules above still see
    // real line boundaries.
    html.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_resolves_before_italic() {
        assert_eq!(
            render_markdown("**a** *b*"),
            "<strong>a</strong> <em>b</em>"
        );
    }

    #[test]
    fn link_opens_in_new_tab() {
        assert_eq!(
            render_markdown("[x](http://y)"),
            r#"<a href="http://y" target="_blank">x</a>"#
        );
    }

    #[test]
    fn level_two_heading_becomes_h3() {
        assert_eq!(render_markdown("## Title"), "<h3>Title</h3>");
    }

    #[test]
    fn heading_allows_leading_whitespace() {
        assert_eq!(render_markdown("  ## Title"), "<h3>Title</h3>");
    }

    #[test]
    fn list_items_share_a_single_wrapper() {
        assert_eq!(
            render_markdown("* one\n* two"),
            "<ul><li>one</li><br><li>two</li></ul>"
        );
    }

    #[test]
    fn any_item_pulls_the_whole_message_into_the_wrapper() {
        assert_eq!(
            render_markdown("intro\n* one"),
            "<ul>intro<br><li>one</li></ul>"
        );
    }

    #[test]
    fn unpaired_bold_stays_literal() {
        assert_eq!(render_markdown("a ** b"), "a ** b");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(render_markdown("a\nb"), "a<br>b");
    }

    #[test]
    fn inline_markup_inside_a_heading() {
        assert_eq!(
            render_markdown("## A **bold** move"),
            "<h3>A <strong>bold</strong> move</h3>"
        );
    }

    #[test]
    fn rendering_rendered_output_is_stable() {
        let once = render_markdown("## Title with **bold**, *italic* and [x](http://y)");
        assert_eq!(render_markdown(&once), once);
    }
}
