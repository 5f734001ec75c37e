//! Result formatting — the pluggable output boundary.
//!
//! One pipeline serves every transport; transports differ only in the
//! formatter they plug in. JSON is the structured contract; HTML is a
//! self-contained page for viewing results directly.

use std::fmt::Write as _;

use crate::errors::FormatError;
use crate::types::{Classification, WordRecord};

/// Renders a [`Classification`] for a transport.
pub trait ResultFormatter {
    fn format(&self, result: &Classification) -> Result<String, FormatError>;
}

/// JSON output with the `knownWords` / `unknownWords` / `brokenWords` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Compact JSON on one line.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON for human consumption.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &Classification) -> Result<String, FormatError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }
}

/// Minimal self-contained HTML page with one list per bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl ResultFormatter for HtmlFormatter {
    fn format(&self, result: &Classification) -> Result<String, FormatError> {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Vocabulary</title></head>\n<body>\n",
        );
        push_section(&mut html, "Known words", &result.known_words);
        push_section(&mut html, "Unknown words", &result.unknown_words);
        push_section(&mut html, "Broken words", &result.broken_words);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

fn push_section(html: &mut String, title: &str, records: &[WordRecord]) {
    // Writing to a String cannot fail.
    let _ = writeln!(html, "<h2>{} ({})</h2>", title, records.len());
    html.push_str("<ul>\n");
    for record in records {
        let _ = write!(html, "<li>{} ({})", escape(&record.value), record.freq);
        if let Some(phrase) = &record.phrase {
            let _ = write!(html, " <em>{}</em>", escape(phrase));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

/// Escape the characters that matter inside an HTML text node.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
