//! Selector Infrastructure
//!
//! Rules are simple predicate functions that test whether a Selection marks
//! a person-of-interest container. The rule set is fixed: it does not depend
//! on the input document.

use dom_query::Selection;

use crate::dom;

/// Class marker identifying a person-of-interest container.
pub const PERSON_OF_INTEREST_CLASS: &str = "section--person-of-interest";

/// A selector rule that tests if a selection matches certain criteria.
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule.
///
/// Iterates through all descendants in document order and collects every
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use onthisday_poi::selector::{self, is_person_of_interest};
/// use onthisday_poi::dom;
///
/// let doc = dom::parse(r#"<body><div class="section--person-of-interest">x</div></body>"#);
/// let root = doc.select("html");
///
/// let results = selector::query_all(&root, is_person_of_interest);
/// assert_eq!(results.len(), 1);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    // Iterate all descendants in document order
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

/// Rule: person-of-interest container.
///
/// Matches elements whose class attribute contains the
/// [`PERSON_OF_INTEREST_CLASS`] marker as a whole class token, the same way
/// a `.section--person-of-interest` class selector would.
#[must_use]
pub fn is_person_of_interest(sel: &Selection) -> bool {
    class(sel)
        .split_ascii_whitespace()
        .any(|token| token == PERSON_OF_INTEREST_CLASS)
}

/// Get element class attribute (empty string if missing).
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}
