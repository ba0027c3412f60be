//! Parsing of single `key:value` parameter lines.

use std::fmt;

/// Which block a parameter line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterOrigin {
    /// The options the user edited.
    Options,
    /// Saved extra parameters appended after the user's options.
    Extension,
}

impl fmt::Display for ParameterOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterOrigin::Options => write!(f, "options"),
            ParameterOrigin::Extension => write!(f, "extension"),
        }
    }
}

/// One `key:value` entry controlling framework initialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterLine {
    pub key: String,
    pub value: String,
}

impl ParameterLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a raw line.
    ///
    /// All whitespace is removed before splitting on the first `:`. A line
    /// without a colon becomes a key with an empty value. Returns `None` for
    /// lines that are blank once whitespace is removed.
    ///
    /// ```
    /// use apiconsole::options::ParameterLine;
    ///
    /// let line = ParameterLine::parse("  api_key : abc ").unwrap();
    /// assert_eq!(line, ParameterLine::new("api_key", "abc"));
    ///
    /// let url = ParameterLine::parse("proxy: http://example.com").unwrap();
    /// assert_eq!(url.value, "http://example.com");
    ///
    /// assert!(ParameterLine::parse(" \t ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return None;
        }

        Some(match compact.split_once(':') {
            Some((key, value)) => Self::new(key, value),
            None => Self::new(compact, ""),
        })
    }
}

impl fmt::Display for ParameterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::options::line::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(
            ParameterLine::parse("a:1"),
            Some(ParameterLine::new("a", "1"))
        );
    }

    #[test]
    fn test_parse_strips_inner_whitespace() {
        assert_eq!(
            ParameterLine::parse("on Load :  my Callback\r"),
            Some(ParameterLine::new("onLoad", "myCallback"))
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        assert_eq!(
            ParameterLine::parse("url:https://example.com:8080/x"),
            Some(ParameterLine::new("url", "https://example.com:8080/x"))
        );
    }

    #[test]
    fn test_parse_without_colon() {
        assert_eq!(
            ParameterLine::parse("lonely token"),
            Some(ParameterLine::new("lonelytoken", ""))
        );
    }

    #[test]
    fn test_parse_empty_key() {
        assert_eq!(
            ParameterLine::parse(":value"),
            Some(ParameterLine::new("", "value"))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ParameterLine::parse(""), None);
        assert_eq!(ParameterLine::parse("   "), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParameterLine::new("a", "1").to_string(), "a: 1");
        assert_eq!(ParameterLine::new("flag", "").to_string(), "flag: ");
    }

    #[test]
    fn test_display_reparses_to_same_line() {
        let line = ParameterLine::new("authorize", "true");
        assert_eq!(ParameterLine::parse(&line.to_string()), Some(line));
    }
}
