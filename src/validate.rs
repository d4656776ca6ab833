use regex::Regex;
use std::sync::LazyLock;

/// Accepted URL grammar, matched case-insensitively against the whole string:
///
/// - scheme `http`, `https`, `ftp` or `ftps`, then `://`
/// - host: a dotted domain name, `localhost`, a dotted-quad IPv4 address, or
///   an IPv6 literal (optionally bracketed)
/// - optional `:<port>`
/// - optional path or query: a bare `/`, or `/`/`?` followed by non-whitespace
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:",
        r"(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}",
        r"|\[?[A-F0-9]*:[A-F0-9:]+\]?",
        r")",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

/// Syntactic check that `url` is something we are willing to shorten.
///
/// Never touches the network; a syntactically fine URL pointing nowhere is
/// still accepted.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}
