//! Markup stripping
//!
//! Removes HTML/XML markup from a raw document, keeping only the
//! rendered text content. Each text node is trimmed before
//! concatenation, so markup never contributes extra whitespace; plain
//! text documents pass through with their internal newlines intact
//! (the downstream segmenter works line by line).
//!
//! The parse is best-effort: mismatched end tags are tolerated, and
//! input the event reader cannot parse at all falls back to a simple
//! tag-skipping scan.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the text content of a (possibly malformed) markup document.
pub fn strip_markup(raw: &str) -> String {
    let mut reader = Reader::from_str(raw);
    reader.check_end_names(false);

    let mut text = String::with_capacity(raw.len());
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let node = match t.unescape() {
                    Ok(unescaped) => unescaped.into_owned(),
                    // Unknown entities: keep the raw bytes verbatim
                    Err(_) => String::from_utf8_lossy(t.as_ref()).into_owned(),
                };
                text.push_str(node.trim());
            }
            Ok(Event::CData(c)) => {
                let node = String::from_utf8_lossy(&c.into_inner()).into_owned();
                text.push_str(node.trim());
            }
            Ok(Event::Eof) => break,
            // Tags, comments, declarations, processing instructions
            Ok(_) => {}
            // Markup too broken for the event reader - scan instead
            Err(_) => return strip_tags_scan(raw),
        }
    }

    text
}

/// Fallback strip: skip everything between `<` and `>`.
///
/// Keeps stray text on unparseable input rather than failing the run.
fn strip_tags_scan(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;

    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through_with_newlines() {
        assert_eq!(strip_markup("犬。\n猫。"), "犬。\n猫。");
    }

    #[test]
    fn simple_markup_is_removed() {
        assert_eq!(strip_markup("<p>犬 が 猫。を 追う。</p>"), "犬 が 猫。を 追う。");
    }

    #[test]
    fn nested_and_mismatched_tags_are_tolerated() {
        assert_eq!(
            strip_markup("<html><body><p>hello <b>world</p></body></html>"),
            "helloworld"
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(strip_markup("<p>a &amp; b</p>"), "a & b");
    }

    #[test]
    fn scan_fallback_drops_tag_spans() {
        assert_eq!(strip_tags_scan("<p attr='x>text</p>"), "text");
    }
}
