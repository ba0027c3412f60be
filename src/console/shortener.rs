//! Requests to the URL shortening service.

use std::fmt;

use serde_json::Value;

use crate::config::ShortenerConfig;
use crate::utils::encode_uri_component;

/// The request URL would exceed the configured limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTooLong {
    pub length: usize,
    pub limit: usize,
}

impl fmt::Display for UrlTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Short URL cannot be generated. Potential loss of data due to URL length limitations. Consider creating an example file."
        )
    }
}

impl std::error::Error for UrlTooLong {}

/// Build the shortening request for `long_url`.
pub fn request_url(config: &ShortenerConfig, long_url: &str) -> Result<String, UrlTooLong> {
    let url = format!(
        "{}?login={}&apiKey={}&longUrl={}&format=json",
        config.endpoint,
        config.login,
        config.api_key,
        encode_uri_component(long_url)
    );

    if url.len() >= config.max_url_length {
        return Err(UrlTooLong {
            length: url.len(),
            limit: config.max_url_length,
        });
    }
    Ok(url)
}

/// Extract the short URL from the service's JSON response.
pub fn short_url_from_response(response: &Value) -> Option<String> {
    response
        .get("data")?
        .get("url")?
        .as_str()
        .map(str::to_string)
}
