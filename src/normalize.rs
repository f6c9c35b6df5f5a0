//! Description clean-up applied to per-code documentation.
//!
//! Row descriptions in the source carry HTML character references (`&amp;`,
//! `&#x2F;`, ...) and two inline markup tokens, `KEYCAP` and `PHONETIC`, that
//! only make sense in the rendered UI Events document. Section descriptions are
//! left untouched.

/// Markup tokens deleted outright from descriptions.
const MARKUP_TOKENS: &[&str] = &["KEYCAP", "PHONETIC"];

/// Decode character references, then delete the markup tokens.
///
/// Decoding follows the HTML5 text rules: legacy named references are
/// accepted without a trailing semicolon, `&#128;`..`&#159;` map through the
/// Windows-1252 table and invalid code points become U+FFFD.
///
/// Only the token text is removed; surrounding characters (including spaces)
/// are kept as they are.
pub fn normalize_description(raw: &str) -> String {
    let mut text = htmlize::unescape(raw).into_owned();
    for token in MARKUP_TOKENS {
        text = text.replace(*token, "");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(normalize_description("&lt;Shift&gt; &amp; Tab"), "<Shift> & Tab");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(normalize_description("&#x2F; and &#47;"), "/ and /");
    }

    #[test]
    fn test_decode_legacy_references_without_semicolon() {
        assert_eq!(normalize_description("&amp x"), "& x");
        assert_eq!(normalize_description("&lt"), "<");
        assert_eq!(normalize_description("&copy"), "\u{a9}");
    }

    #[test]
    fn test_decode_numeric_overrides() {
        assert_eq!(normalize_description("&#128;"), "\u{20ac}");
        assert_eq!(normalize_description("&#0;"), "\u{fffd}");
        assert_eq!(normalize_description("&#xD800;"), "\u{fffd}");
    }

    #[test]
    fn test_strip_markup_tokens() {
        assert_eq!(
            normalize_description("KEYCAP{a} on a PHONETIC{ro} key"),
            "{a} on a {ro} key"
        );
    }

    #[test]
    fn test_decode_and_strip_together() {
        assert_eq!(
            normalize_description("Labelled KEYCAP&quot;`~&quot; on US"),
            "Labelled \"`~\" on US"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize_description("The foo key"), "The foo key");
    }

    #[test]
    fn test_line_break_marker_survives() {
        assert_eq!(normalize_description("one<br/>two"), "one<br/>two");
    }
}
