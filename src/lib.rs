//! # onthisday-poi
//!
//! Extracts "person of interest" entries from onthisday.com birthday pages.
//!
//! Each birthday page carries a set of highlighted person-of-interest
//! sections. This library parses the page HTML, finds every such section,
//! and returns the descriptive text of each one, in document order. Fetching
//! the page and printing the results live at the edges ([`fetch`] and
//! [`output`]); the extraction core is a pure function of the HTML input.
//!
//! ## Quick Start
//!
//! ```rust
//! use onthisday_poi::extract;
//!
//! let html = r#"<html><body>
//! <div class="section--person-of-interest">
//!   <div><div><div><p>Jane Doe, born 1900</p></div></div></div>
//! </div>
//! </body></html>"#;
//!
//! let entries = extract(html)?;
//! assert_eq!(entries, vec!["Jane Doe, born 1900".to_string()]);
//! # Ok::<(), onthisday_poi::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Parsing is permissive: malformed HTML is interpreted the way browsers
//!   interpret it, never rejected outright.
//! - A section missing the expected nested structure produces no entry and
//!   no error; the remaining sections still extract.
//! - Extraction is pure and idempotent.

mod error;
mod extract;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection, input transcoding, and output re-encoding.
pub mod encoding;

/// Birthday page URL construction and HTTP retrieval.
pub mod fetch;

/// Line-oriented entry output sink.
pub mod output;

/// Selector rule infrastructure for container finding.
pub mod selector;

// Public API - re-exports
pub use error::{Error, Result};

/// Extracts person-of-interest entries from an HTML document.
///
/// Returns one string per matched container that carries the expected nested
/// structure, in document order. Containers lacking the structure are
/// skipped. Fails only when the input cannot be treated as an HTML document
/// at all.
///
/// # Example
///
/// ```rust
/// use onthisday_poi::extract;
///
/// let html = "<html><body><p>No matching sections here.</p></body></html>";
/// let entries = extract(html)?;
/// assert!(entries.is_empty());
/// # Ok::<(), onthisday_poi::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<Vec<String>> {
    extract::extract_entries(html)
}

/// Extracts person-of-interest entries from HTML bytes with automatic
/// encoding detection.
///
/// Detects the character encoding from meta tags, converts to UTF-8 with
/// lossy replacement, and extracts. Use this for raw fetched response
/// bodies.
///
/// # Example
///
/// ```rust
/// use onthisday_poi::extract_bytes;
///
/// // ISO-8859-1 encoded page with a declared charset
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>\
/// <div class=\"section--person-of-interest\">\
/// <div><div><div><p>Ren\xE9 Descartes, born 1596</p></div></div></div>\
/// </div></body></html>";
/// let entries = extract_bytes(html)?;
/// assert_eq!(entries, vec!["Ren\u{e9} Descartes, born 1596".to_string()]);
/// # Ok::<(), onthisday_poi::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<Vec<String>> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}
