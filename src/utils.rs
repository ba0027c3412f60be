//! Common utility functions shared across the codebase.
//!
//! Links produced by the console are read back by browsers, so text is
//! encoded the way the page's own scripts encode it: `escape`/`unescape` for
//! the location hash and `encodeURIComponent` for query parameters.

/// Legacy `escape()`.
///
/// ```
/// use apiconsole::utils::js_escape;
///
/// assert_eq!(js_escape("a b&c"), "a%20b%26c");
/// assert_eq!(js_escape("é"), "%E9");
/// assert_eq!(js_escape("€"), "%u20AC");
/// ```
pub fn js_escape(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for unit in src.encode_utf16() {
        if unit <= 0x7F && is_unescaped_legacy_escape_byte(unit as u8) {
            out.push(unit as u8 as char);
        } else if unit <= 0xFF {
            push_percent_byte(&mut out, unit as u8);
        } else {
            out.push_str("%u");
            for shift in [12u16, 8, 4, 0] {
                out.push(to_hex_upper(((unit >> shift) & 0x0F) as u8));
            }
        }
    }
    out
}

/// Legacy `unescape()`. Malformed escapes are kept literally.
///
/// ```
/// use apiconsole::utils::js_unescape;
///
/// assert_eq!(js_unescape("a%20b%u20AC"), "a b€");
/// assert_eq!(js_unescape("100%"), "100%");
/// ```
pub fn js_unescape(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut units: Vec<u16> = Vec::with_capacity(src.len());
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(unit) = parse_unicode_escape(bytes, i) {
                units.push(unit);
                i += 6;
                continue;
            }
            if let Some(byte) = parse_hex_pair(bytes, i + 1) {
                units.push(u16::from(byte));
                i += 3;
                continue;
            }
        }

        let ch = src[i..].chars().next().unwrap_or_default();
        let mut buf = [0u16; 2];
        units.extend_from_slice(ch.encode_utf16(&mut buf));
        i += ch.len_utf8();
    }

    String::from_utf16_lossy(&units)
}

/// `encodeURIComponent()`.
///
/// ```
/// use apiconsole::utils::encode_uri_component;
///
/// assert_eq!(
///     encode_uri_component("http://x.com/a b?c=1"),
///     "http%3A%2F%2Fx.com%2Fa%20b%3Fc%3D1"
/// );
/// ```
pub fn encode_uri_component(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for b in src.bytes() {
        if is_unescaped_uri_component_byte(b) {
            out.push(b as char);
        } else {
            push_percent_byte(&mut out, b);
        }
    }
    out
}

fn push_percent_byte(out: &mut String, b: u8) {
    out.push('%');
    out.push(to_hex_upper(b >> 4));
    out.push(to_hex_upper(b & 0x0F));
}

fn parse_unicode_escape(bytes: &[u8], offset: usize) -> Option<u16> {
    if offset + 5 >= bytes.len() || bytes[offset + 1] != b'u' {
        return None;
    }
    let hi = parse_hex_pair(bytes, offset + 2)?;
    let lo = parse_hex_pair(bytes, offset + 4)?;
    Some((u16::from(hi) << 8) | u16::from(lo))
}

fn parse_hex_pair(bytes: &[u8], offset: usize) -> Option<u8> {
    let hi = from_hex_digit(*bytes.get(offset)?)?;
    let lo = from_hex_digit(*bytes.get(offset + 1)?)?;
    Some((hi << 4) | lo)
}

fn is_unescaped_legacy_escape_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'*' | b'+' | b'-' | b'.' | b'/' | b'@' | b'_')
}

fn is_unescaped_uri_component_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

fn to_hex_upper(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}

fn from_hex_digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
