//! Final request URI resolution.
//!
//! Joining is deliberately literal. The base URL and the relative path are
//! concatenated with no slash deduplication or insertion, and query
//! parameters are appended without inspecting the URL for an existing
//! query string. Existing callers depend on both behaviors.

use std::collections::HashMap;

use url::form_urlencoded;

/// Resolve a possibly-relative request URL against the base URL.
///
/// The absolute check is a literal prefix test: any URL starting with
/// `"http"` is used verbatim, scheme or not.
pub(crate) fn resolve(base_url: &str, url: &str) -> String {
    if url.starts_with("http") {
        return url.to_owned();
    }

    format!("{base_url}{url}")
}

/// Percent-encode `query` and append it to `url` after a literal `?`.
///
/// A query string already embedded in `url` is not merged; the result then
/// contains two `?` separators. Parameter order follows map iteration and
/// is not guaranteed.
pub(crate) fn append_query(url: String, query: &HashMap<String, String>) -> String {
    if query.is_empty() {
        return url;
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();

    format!("{url}?{encoded}")
}
