//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate providing the parsing, attribute,
//! and navigation operations the extraction pipeline needs. Every lookup is
//! total: a missing attribute, child, or descendant is `None`, never a panic.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing is permissive (html5ever): unclosed tags and other minor
/// malformations are recovered the way browsers recover them.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, concatenated in document
/// order with no added separators.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Get the first direct child element with the given tag name.
///
/// Returns `None` when the selection has no such child.
#[must_use]
pub fn first_element_child<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .find(|node| {
            node.is_element() && node.node_name().is_some_and(|name| &*name == tag)
        })
        .map(|node| Selection::from(*node))
}

/// Get the first descendant element with the given tag name, in document
/// order.
#[must_use]
pub fn first_descendant<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    sel.select(tag)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="hero" class="section--person-of-interest">content</div>"#);
        let div = doc.select("div");

        assert_eq!(class_name(&div), Some("section--person-of-interest".to_string()));
        assert_eq!(get_attribute(&div, "id"), Some("hero".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn test_missing_attributes_are_none() {
        let doc = parse("<div>no attributes</div>");
        let div = doc.select("div");

        assert_eq!(class_name(&div), None);
        assert_eq!(get_attribute(&div, "href"), None);
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let doc = parse("<div><p>Jane <b>Doe</b>, born 1900</p></div>");
        let div = doc.select("div");

        assert_eq!(text_content(&div), "Jane Doe, born 1900".into());
    }

    #[test]
    fn test_first_element_child_by_tag() {
        let doc = parse("<section><span>skip</span><div id=\"a\">first</div><div id=\"b\">second</div></section>");
        let section = doc.select("section");

        let child = first_element_child(&section, "div");
        assert!(child.is_some());
        assert_eq!(
            get_attribute(&child.unwrap(), "id"),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_first_element_child_skips_text_nodes() {
        let doc = parse("<section>  leading text  <div>target</div></section>");
        let section = doc.select("section");

        let child = first_element_child(&section, "div");
        assert!(child.is_some());
        assert_eq!(text_content(&child.unwrap()), "target".into());
    }

    #[test]
    fn test_first_element_child_none_when_missing() {
        let doc = parse("<section><span>only span</span></section>");
        let section = doc.select("section");

        assert!(first_element_child(&section, "div").is_none());
    }

    #[test]
    fn test_first_element_child_is_direct_only() {
        // The div exists, but only as a grandchild
        let doc = parse("<section><span><div>nested</div></span></section>");
        let section = doc.select("section");

        assert!(first_element_child(&section, "div").is_none());
    }

    #[test]
    fn test_first_descendant_document_order() {
        let doc = parse("<div><section><p>deep first</p></section><p>shallow second</p></div>");
        let div = doc.select("div");

        let p = first_descendant(&div, "p");
        assert!(p.is_some());
        assert_eq!(text_content(&p.unwrap()), "deep first".into());
    }

    #[test]
    fn test_first_descendant_none_when_missing() {
        let doc = parse("<div><span>no paragraph</span></div>");
        let div = doc.select("div");

        assert!(first_descendant(&div, "p").is_none());
    }

    #[test]
    fn test_children_excludes_grandchildren() {
        let doc = parse("<div><p>one</p><section><p>nested</p></section></div>");
        let div = doc.select("div");

        assert_eq!(children(&div).length(), 2);
    }
}
