//! Character encoding detection and transcoding.
//!
//! Input side: fetched pages declare their charset in meta tags; bytes are
//! transcoded to UTF-8 before extraction. Output side: entries can be
//! re-encoded into a legacy single-byte charset for sinks that need one.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks for a `<meta charset="...">` declaration first, then the
/// `http-equiv="Content-Type"` form, and defaults to UTF-8 when neither is
/// present. Only the first 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for re in [&CHARSET_META_RE, &CONTENT_TYPE_CHARSET_RE] {
        if let Some(label) = re.captures(&head_str).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Detects the declared encoding and decodes with lossy replacement, so
/// invalid byte sequences become � rather than an error.
///
/// # Examples
///
/// ```
/// use onthisday_poi::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Marie Curie, born 1867</body></html>";
/// assert!(transcode_to_utf8(html).contains("Marie Curie"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

/// Resolve a charset label (e.g. `"windows-1252"`) to an encoding.
///
/// Labels are matched per the WHATWG label registry, so common aliases like
/// `latin1` work. Returns `None` for labels outside that registry.
#[must_use]
pub fn resolve_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Re-encode text into the given charset with lossy substitution.
///
/// Characters the charset cannot represent are substituted (as numeric
/// character references) instead of failing, so any entry can be written to
/// a legacy sink.
#[must_use]
pub fn encode_lossy(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _encoding_used, _had_errors) = encoding.encode(text);
    bytes.into_owned()
}
