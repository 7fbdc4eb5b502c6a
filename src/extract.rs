//! Core entry extraction.
//!
//! Parses the page, finds every person-of-interest container, and resolves
//! the fixed structural path to each container's descriptive paragraph. The
//! path lookups are all optional: a container missing any step is skipped,
//! it never aborts the extraction.

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::selector::{self, is_person_of_interest};

/// Extract all person-of-interest entries from an HTML document.
pub(crate) fn extract_entries(html: &str) -> Result<Vec<String>> {
    if html.trim().is_empty() {
        return Err(Error::ParseError("empty input".to_string()));
    }

    let document = dom::parse(html);
    let root = document.select("html");

    let containers = selector::query_all(&root, is_person_of_interest);

    let mut entries = Vec::with_capacity(containers.len());
    for container in &containers {
        if let Some(text) = entry_text(container) {
            entries.push(text);
        }
    }

    Ok(entries)
}

/// Resolve a container's descriptive paragraph text.
///
/// The paragraph sits at a fixed position inside each container: first child
/// div, its first child div, that child's first child div, then the first
/// paragraph within it. The first missing step short-circuits to `None`.
fn entry_text(container: &Selection) -> Option<String> {
    let outer = dom::first_element_child(container, "div")?;
    let inner = dom::first_element_child(&outer, "div")?;
    let cell = dom::first_element_child(&inner, "div")?;
    let paragraph = dom::first_descendant(&cell, "p")?;
    Some(dom::text_content(&paragraph).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(text: &str) -> String {
        format!(
            r#"<div class="section--person-of-interest"><div><div><div><p>{text}</p></div></div></div></div>"#
        )
    }

    #[test]
    fn extracts_single_entry() {
        let html = format!("<html><body>{}</body></html>", container("Jane Doe, born 1900"));
        let entries = extract_entries(&html).unwrap();
        assert_eq!(entries, vec!["Jane Doe, born 1900".to_string()]);
    }

    #[test]
    fn entry_text_concatenates_inline_markup() {
        let html = r#"<html><body>
            <div class="section--person-of-interest">
              <div><div><div><p><strong>Ada Lovelace</strong> (1815-1852) <a href="/a">mathematician</a></p></div></div></div>
            </div>
        </body></html>"#;
        let entries = extract_entries(html).unwrap();
        assert_eq!(entries, vec!["Ada Lovelace (1815-1852) mathematician".to_string()]);
    }

    #[test]
    fn container_without_paragraph_is_skipped() {
        let html = r#"<html><body>
            <div class="section--person-of-interest"><div><div><div><span>no paragraph</span></div></div></div></div>
        </body></html>"#;
        let entries = extract_entries(html).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn container_with_shallow_nesting_is_skipped() {
        // Only two div levels; the third lookup short-circuits
        let html = r#"<html><body>
            <div class="section--person-of-interest"><div><div><p>too shallow</p></div></div></div>
        </body></html>"#;
        let entries = extract_entries(html).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn path_starts_at_first_child_div() {
        // The first child div has the structure; a later sibling div does not win
        let html = r#"<html><body>
            <div class="section--person-of-interest">
              <div><div><div><p>from first branch</p></div></div></div>
              <div><div><div><p>from second branch</p></div></div></div>
            </div>
        </body></html>"#;
        let entries = extract_entries(html).unwrap();
        assert_eq!(entries, vec!["from first branch".to_string()]);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(matches!(
            extract_entries("   \n  "),
            Err(Error::ParseError(_))
        ));
    }
}
