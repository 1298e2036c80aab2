//! Masking of secret values for human-facing output
//!
//! RPC provider URLs usually embed the account key as a path segment
//! (`https://eth-mainnet.provider.io/v2/<KEY>`), so URLs are masked segment by
//! segment instead of wholesale; scheme and host stay readable.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// Replacement text for masked values
pub const MASK: &str = "****";

/// Values up to this many characters are masked completely
const FULL_MASK_LEN: usize = 8;

/// Characters of a longer secret that stay visible
const VISIBLE_PREFIX_LEN: usize = 4;

/// A path segment that looks like a provider key
static KEY_SEGMENT: OnceLock<Regex> = OnceLock::new();

fn key_segment() -> &'static Regex {
    KEY_SEGMENT.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{16,}$").expect("segment pattern is valid"))
}

/// Mask an opaque secret such as an API key
pub fn redact_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.chars().count() <= FULL_MASK_LEN {
        return MASK.to_string();
    }
    let prefix: String = value.chars().take(VISIBLE_PREFIX_LEN).collect();
    format!("{}{}", prefix, MASK)
}

/// Mask credentials embedded in a URL
///
/// Userinfo, query values and key-like path segments are masked. A value
/// that does not parse as a URL is masked as an opaque secret.
pub fn redact_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let mut parsed = match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed,
        _ => return redact_secret(url),
    };

    mask_userinfo(&mut parsed);
    mask_query(&mut parsed);
    mask_path_segments(&mut parsed);

    let mut masked = String::from(parsed);
    // `Url` always serializes an empty path as `/`
    if masked.ends_with('/') && !url.ends_with('/') {
        masked.pop();
    }
    masked
}

/// A lone username is treated as a token; next to a password it is masked
/// only when it looks like a key
fn mask_userinfo(url: &mut Url) {
    if url.password().is_some() {
        let _ = url.set_password(Some(MASK));
        if key_segment().is_match(url.username()) {
            let _ = url.set_username(MASK);
        }
    } else if !url.username().is_empty() {
        let _ = url.set_username(MASK);
    }
}

fn mask_query(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let keys: Vec<String> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();
    if keys.is_empty() {
        url.set_query(None);
        return;
    }
    url.query_pairs_mut()
        .clear()
        .extend_pairs(keys.iter().map(|key| (key.as_str(), MASK)));
}

fn mask_path_segments(url: &mut Url) {
    let Some(segments) = url.path_segments() else {
        return;
    };

    let path = segments
        .map(|segment| if key_segment().is_match(segment) { MASK } else { segment })
        .collect::<Vec<_>>()
        .join("/");
    url.set_path(&format!("/{}", path));
}
