//! Origin, anchor and session-parameter cleanup
//!
//! Origins come from embedding pages and are untrusted. These helpers never fail:
//! a URL that does not parse yields an empty result or the input unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Query parameter carrying the giscus session token back from OAuth
pub const SESSION_PARAM: &str = "giscus";

/// Cleaned origin of the embedding page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginHost {
    /// Full URL with the session parameter removed
    pub origin: String,
    /// Scheme, host and port only
    pub origin_host: String,
}

/// Parse an origin URL, dropping the session parameter.
///
/// Returns empty strings when `origin` is not a valid absolute URL.
pub fn get_origin_host(origin: &str) -> OriginHost {
    match Url::parse(origin) {
        Ok(mut url) => {
            remove_query_param(&mut url, SESSION_PARAM);
            OriginHost {
                origin_host: url.origin().ascii_serialization(),
                origin: url.into(),
            }
        }
        Err(e) => {
            debug!("Ignoring unparsable origin {:?}: {}", origin, e);
            OriginHost::default()
        }
    }
}

/// Strip the trailing `#fragment` from a URL-like string.
///
/// A `#` directly followed by `/` is kept, since pages using hash-based routing
/// put their route there. Truncation happens at the last `#` that does not.
pub fn clean_anchor(origin: &str) -> &str {
    let cut = origin
        .match_indices('#')
        .map(|(index, _)| index)
        .filter(|&index| !origin[index + 1..].starts_with('/'))
        .last();

    match cut {
        Some(index) => &origin[..index],
        None => origin,
    }
}

/// Remove the session parameter from a URL, or return it unchanged if it doesn't parse
pub fn clean_session_param(url: &str) -> String {
    strip_query_param(url, SESSION_PARAM)
}

/// Remove every occurrence of `name` from the query string of `url`.
///
/// Unparsable input is returned unchanged.
pub fn strip_query_param(url: &str, name: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            remove_query_param(&mut parsed, name);
            parsed.into()
        }
        Err(e) => {
            debug!("Leaving unparsable URL {:?} untouched: {}", url, e);
            url.to_string()
        }
    }
}

/// Drop `name` from the query, re-encoding the remaining pairs.
///
/// The query is always rebuilt in form-urlencoded form, so `%20` becomes `+`
/// and empty pairs vanish even when `name` is absent. An empty query is removed.
fn remove_query_param(url: &mut Url, name: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}
