//! Example references and how their code is obtained.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::location::INLINE_CODE_PREFIX;
use crate::utils::{encode_uri_component, js_unescape};

static REMOTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?|ftp)://.+").expect("Invalid remote url regex"));

/// Where the code of an example comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleSource {
    /// The code is embedded in the reference itself.
    Inline { code: String },
    /// A full URL, fetched as CSV through YQL.
    Remote { url: String },
    /// A file served next to the console page.
    Local { path: String },
}

impl ExampleSource {
    /// Classify an example reference; `None` when there is nothing to load.
    ///
    /// ```
    /// use apiconsole::console::ExampleSource;
    ///
    /// assert_eq!(
    ///     ExampleSource::classify("c=alert%281%29"),
    ///     Some(ExampleSource::Inline { code: "alert(1)".to_string() })
    /// );
    /// assert!(matches!(
    ///     ExampleSource::classify("https://gist.example.com/raw/1"),
    ///     Some(ExampleSource::Remote { .. })
    /// ));
    /// assert_eq!(ExampleSource::classify("undefined"), None);
    /// ```
    pub fn classify(example: &str) -> Option<Self> {
        if matches!(example, "" | "#" | "undefined") {
            return None;
        }

        if example.contains(INLINE_CODE_PREFIX) {
            return Some(ExampleSource::Inline {
                code: js_unescape(&example.replacen(INLINE_CODE_PREFIX, "", 1)),
            });
        }

        if REMOTE_URL_REGEX.is_match(example) {
            return Some(ExampleSource::Remote {
                url: example.to_string(),
            });
        }

        Some(ExampleSource::Local {
            path: example.to_string(),
        })
    }
}

/// YQL request fetching `url` as CSV rows in JSON.
pub fn yql_query_url(endpoint: &str, url: &str) -> String {
    format!(
        "{}?q=select%20*%20from%20csv%20where%20url%3D%22{}%22&format=json&callback=",
        endpoint,
        encode_uri_component(url)
    )
}

/// Rebuild the fetched file from a YQL CSV response.
///
/// Columns are joined with `,` and rows terminated with `\n`, undoing the
/// CSV split. Returns `None` when the response holds no rows.
pub fn rows_to_text(response: &Value) -> Option<String> {
    let query = response.get("query")?;
    if is_zero_count(query.get("count")?) {
        return None;
    }

    let rows = query.get("results")?.get("row")?;
    let rows: Vec<&Value> = match rows {
        Value::Array(rows) => rows.iter().collect(),
        row @ Value::Object(_) => vec![row],
        _ => return None,
    };

    let mut text = String::new();
    for row in rows {
        let Value::Object(columns) = row else {
            text.push('\n');
            continue;
        };
        for (column, value) in columns {
            if column != "col0" {
                text.push(',');
            }
            push_cell(&mut text, value);
        }
        text.push('\n');
    }
    Some(text)
}

fn is_zero_count(count: &Value) -> bool {
    match count {
        Value::String(s) => s == "0",
        Value::Number(n) => n.as_u64() == Some(0),
        _ => false,
    }
}

fn push_cell(text: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => text.push_str(s),
        other => text.push_str(&other.to_string()),
    }
}
