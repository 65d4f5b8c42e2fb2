//! Syntactic URL parsing and hostname extraction.

use url::{Host, Url};

/// Errors that can occur while parsing a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlParseError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL contains stray whitespace or control characters")]
    StrayWhitespace,
}

/// Parses `input` as an absolute URL.
///
/// Only well-formedness is checked: any scheme is accepted, and the input
/// is not normalized. Input the URL parser would silently clean up is
/// rejected instead, since the raw string is what gets stored.
///
/// # Errors
///
/// Returns [`UrlParseError::StrayWhitespace`] for leading or trailing
/// whitespace/control characters, or a tab, CR or LF anywhere.
///
/// Returns [`UrlParseError::InvalidFormat`] for empty input, relative
/// references, or otherwise malformed URLs.
pub fn parse_url(input: &str) -> Result<Url, UrlParseError> {
    let is_stray = |c: char| c.is_ascii_whitespace() || c.is_ascii_control();
    if input.starts_with(is_stray)
        || input.ends_with(is_stray)
        || input.contains(['\t', '\n', '\r'])
    {
        return Err(UrlParseError::StrayWhitespace);
    }

    Ok(Url::parse(input)?)
}

/// Extracts the hostname used as the metrics key.
///
/// IPv6 hosts are returned without brackets. URLs without a host map to the
/// empty string.
///
/// # Examples
///
/// ```ignore
/// let url = parse_url("https://example.com:8443/a").unwrap();
/// assert_eq!(hostname(&url), "example.com");
/// ```
pub fn hostname(url: &Url) -> String {
    match url.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => String::new(),
    }
}
