//! Simple CLI that reads HTML from stdin and outputs extracted entries as
//! JSON. Useful for testing the extractor against saved pages without
//! network access.

use onthisday_poi::extract;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    entries: Vec<String>,
}

fn main() {
    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let output = match extract(&html) {
        Ok(entries) => Output { entries },
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            Output { entries: Vec::new() }
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
