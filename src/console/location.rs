//! Share links encoded in the location hash.
//!
//! The hash has the form `#<example>&<preferences>`, where `<example>` is an
//! example reference (a path, a URL, or `c=` followed by escaped code) and
//! `<preferences>` is escaped preferences JSON.

use anyhow::Result;

use super::preferences::Preferences;
use crate::utils::{js_escape, js_unescape};

/// Prefix marking an example reference that carries the code itself.
pub const INLINE_CODE_PREFIX: &str = "c=";

/// The page location the console reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Everything before the `#`.
    pub base: String,
    /// The hash including its leading `#`, or empty.
    pub hash: String,
}

impl Location {
    pub fn new(base: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            hash: hash.into(),
        }
    }

    /// Split a full URL at its first `#`.
    pub fn parse(href: &str) -> Self {
        match href.find('#') {
            Some(index) => Self::new(&href[..index], &href[index..]),
            None => Self::new(href, ""),
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.base, self.hash)
    }

    pub fn set_hash(&mut self, hash: &str) {
        self.hash = if hash.is_empty() || hash.starts_with('#') {
            hash.to_string()
        } else {
            format!("#{hash}")
        };
    }
}

fn strip_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// The example reference: the part of the hash before the first `&`.
pub fn example_from_hash(hash: &str) -> &str {
    let hash = strip_hash(hash);
    hash.split_once('&').map_or(hash, |(example, _)| example)
}

/// Preferences carried after the first `&`, if present.
pub fn preferences_from_hash(hash: &str) -> Option<Result<Preferences>> {
    let (_, encoded) = strip_hash(hash).split_once('&')?;
    Some(Preferences::from_json(&js_unescape(encoded)))
}

/// Example reference that embeds `code`.
pub fn inline_code_example(code: &str) -> String {
    format!("{}{}", INLINE_CODE_PREFIX, js_escape(code))
}

/// Build `#<example>&<escaped preferences>`.
pub fn build_hash(example: &str, preferences: &Preferences) -> Result<String> {
    Ok(format!("#{}&{}", example, js_escape(&preferences.to_json()?)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::console::location::*;

    #[test]
    fn test_example_from_hash() {
        assert_eq!(example_from_hash("#examples/hello.html&%7B%7D"), "examples/hello.html");
        assert_eq!(example_from_hash("#examples/hello.html"), "examples/hello.html");
        assert_eq!(example_from_hash("#"), "");
        assert_eq!(example_from_hash(""), "");
    }

    #[test]
    fn test_hash_round_trip() {
        let prefs = Preferences {
            framework: Some("custom".to_string()),
            apioptions: Some("onLoad: go\nauthorize: true\n".to_string()),
            ..Default::default()
        };
        let example = inline_code_example("function go() { return a & b; }");
        let hash = build_hash(&example, &prefs).unwrap();

        assert_eq!(hash.matches('&').count(), 1);
        assert_eq!(example_from_hash(&hash), example);
        assert_eq!(preferences_from_hash(&hash).unwrap().unwrap(), prefs);
    }

    #[test]
    fn test_preferences_absent() {
        assert!(preferences_from_hash("#examples/a.html").is_none());
    }

    #[test]
    fn test_preferences_malformed() {
        let result = preferences_from_hash("#a.html&%7Bbroken");
        assert!(matches!(result, Some(Err(_))));
    }

    #[test]
    fn test_location_parse_and_href() {
        let mut location = Location::parse("http://host/console/#a.html");
        assert_eq!(location.base, "http://host/console/");
        assert_eq!(location.hash, "#a.html");

        location.set_hash("b.html&x");
        assert_eq!(location.href(), "http://host/console/#b.html&x");
    }
}
