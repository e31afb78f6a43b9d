/// Escapes that appear in article filenames, replaced in this order.
///
/// Only these sequences are decoded. Any other `%XX` in a filename is kept
/// as-is in the title, so this must not become a general percent-decoder.
const TITLE_ESCAPES: &[(&str, &str)] = &[
    ("%20", " "),
    ("%E2%80%94", "\u{2014}"), // em dash
    ("%EF%BC%9A", "\u{ff1a}"), // fullwidth colon
];

/// e.g. "Hello%20World" -> "Hello World"
pub fn decode_title(raw: &str) -> String {
    TITLE_ESCAPES
        .iter()
        .fold(raw.to_string(), |title, (from, to)| title.replace(from, to))
}

/// Makes `s` safe inside a double-quoted attribute value. Only `"` is escaped.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_title_test() {
        assert_eq!(decode_title("Hello%20World"), "Hello World");
        assert_eq!(decode_title("Caf%E2%80%94Talk"), "Caf—Talk");
        assert_eq!(decode_title("Note%EF%BC%9Aone"), "Note：one");
        assert_eq!(decode_title("a%20b%20c"), "a b c");
        assert_eq!(decode_title("plain"), "plain");
    }

    #[test]
    fn decode_title_keeps_other_escapes() {
        assert_eq!(decode_title("100%25%20sure"), "100%25 sure");
        assert_eq!(decode_title("caf%C3%A9"), "caf%C3%A9");
        assert_eq!(decode_title("%e2%80%94"), "%e2%80%94");
    }

    #[test]
    fn escape_quotes_test() {
        assert_eq!(escape_quotes(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_quotes("<b>&'</b>"), "<b>&'</b>");
    }
}
