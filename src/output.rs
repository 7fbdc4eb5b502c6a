//! Line-oriented entry output.
//!
//! Writes extracted entries to any sink, one per line, in extraction order.
//! The optional charset transform re-encodes each line for legacy sinks;
//! the default is UTF-8 passthrough.

use std::io::{self, Write};

use encoding_rs::Encoding;

use crate::encoding;

/// Write entries to the sink, one per line.
///
/// With a charset, each entry is re-encoded lossily before writing; without
/// one, entries are written as UTF-8.
pub fn write_entries<W: Write>(
    sink: &mut W,
    entries: &[String],
    charset: Option<&'static Encoding>,
) -> io::Result<()> {
    for entry in entries {
        match charset {
            Some(enc) => {
                sink.write_all(&encoding::encode_lossy(entry, enc))?;
                sink.write_all(b"\n")?;
            }
            None => writeln!(sink, "{entry}")?,
        }
    }
    sink.flush()
}
