//! Canonical forms for equality comparison
//!
//! DOIs, and IGSNs registered under DOI or Handle prefixes, have more than one
//! common spelling; every other scheme is compared on its trimmed input.

use crate::kind::IdentifierType;

/// Resolver prefixes stripped from DOIs, compared case-insensitively
const DOI_RESOLVER_PREFIXES: &[&str] = &[
    "https://doi.org/",
    "https://dx.doi.org/",
    "http://doi.org/",
    "http://dx.doi.org/",
];

/// DOI resolvers plus the Handle proxy used by legacy IGSN handles
const IGSN_RESOLVER_PREFIXES: &[&str] = &[
    "https://doi.org/",
    "https://dx.doi.org/",
    "http://doi.org/",
    "http://dx.doi.org/",
    "https://hdl.handle.net/",
    "http://hdl.handle.net/",
];

const DOI_SCHEME_PREFIX: &str = "doi:";

/// Normalize an identifier for comparison
///
/// Idempotent: `normalize(&normalize(x, t), t) == normalize(x, t)`.
///
/// # Examples
/// ```
/// use curate_identifiers::{normalize, IdentifierType};
/// assert_eq!(
///     normalize("https://dx.doi.org/10.5880/GFZ.1.1", IdentifierType::Doi),
///     "10.5880/GFZ.1.1"
/// );
/// assert_eq!(normalize("  ark:/13960/t5z64fc55 ", IdentifierType::Ark), "ark:/13960/t5z64fc55");
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize(identifier: &str, identifier_type: IdentifierType) -> String {
    match identifier_type {
        IdentifierType::Doi => strip_prefixes(identifier, DOI_RESOLVER_PREFIXES).to_string(),
        IdentifierType::Igsn => strip_prefixes(identifier, IGSN_RESOLVER_PREFIXES).to_string(),
        _ => identifier.trim().to_string(),
    }
}

/// Strip resolver and scheme prefixes until none is left
fn strip_prefixes<'a>(identifier: &'a str, resolvers: &[&str]) -> &'a str {
    let mut current = identifier.trim();
    loop {
        let mut next = current;
        if let Some(rest) = resolvers
            .iter()
            .find_map(|prefix| strip_prefix_ignore_case(next, prefix))
        {
            next = rest;
        }
        if let Some(rest) = strip_prefix_ignore_case(next, DOI_SCHEME_PREFIX) {
            next = rest;
        }
        let next = next.trim();
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}
