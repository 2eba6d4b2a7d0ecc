use encoding_rs::WINDOWS_1252;

/// Trim whitespace, then strip any surrounding quote characters and spaces.
pub fn clean_str(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == ' ')
        .to_string()
}

/// Parse a cell as a finite number. Empty cells, NaN and infinities are rejected.
pub fn parse_finite(raw: &str) -> Option<f64> {
    let cleaned = clean_str(raw);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode bytes as Windows-1252. Every byte maps to some character, so
/// `had_errors` is only reported for completeness.
pub fn decode_legacy(bytes: &[u8]) -> (String, bool) {
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (text.into_owned(), had_errors)
}

/// Windows-1252 leaves 0x81, 0x8D, 0x8F, 0x90 and 0x9D undefined; the decoder
/// passes them through as C1 controls.
fn is_undefined_legacy(c: char) -> bool {
    matches!(c, '\u{81}' | '\u{8D}' | '\u{8F}' | '\u{90}' | '\u{9D}')
}

/// Decode one line as Windows-1252 and drop undecodable characters.
pub fn decode_legacy_lossy(bytes: &[u8]) -> String {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.chars().filter(|c| !is_undefined_legacy(*c)).collect()
}

/// Strip a UTF-8 byte order mark if present.
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_str_strips_quotes_and_spaces() {
        assert_eq!(clean_str("  \"12.5\" "), "12.5");
        assert_eq!(clean_str("' altitude '"), "altitude");
        assert_eq!(clean_str("plain"), "plain");
        assert_eq!(clean_str("\"\""), "");
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite(" 1000 "), Some(1000.0));
        assert_eq!(parse_finite("\"-3.5\""), Some(-3.5));
        assert_eq!(parse_finite("1e3"), Some(1000.0));
        assert_eq!(parse_finite("N/A"), None);
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
    }

    #[test]
    fn test_decode_legacy_accepts_every_byte() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let (text, had_errors) = decode_legacy(&bytes);
        assert!(!had_errors);
        assert_eq!(text.chars().count(), 256);
    }

    #[test]
    fn test_decode_legacy_lossy_drops_undefined_bytes() {
        assert_eq!(decode_legacy_lossy(b"1,\x81 2,3"), "1, 2,3");
        // 0xE9 is a defined character (e-acute)
        assert_eq!(decode_legacy_lossy(b"caf\xE9"), "caf\u{e9}");
    }

    #[test]
    fn test_strip_utf8_bom() {
        assert_eq!(strip_utf8_bom(b"\xEF\xBB\xBFa,b"), b"a,b");
        assert_eq!(strip_utf8_bom(b"a,b"), b"a,b");
    }
}
