//! Identifier type detection
//!
//! `detect` maps any string to exactly one [`IdentifierType`]. The rule table
//! in [`crate::rules`] is compiled once and split into buckets keyed by the
//! first character of the input, so a keystroke only runs the handful of
//! patterns that could possibly match.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::kind::IdentifierType;
use crate::rules::{RuleSpec, RULES};

/// One bucket per ASCII digit, one per ASCII letter, one for everything else
const BUCKET_COUNT: usize = 37;
const OTHER_BUCKET: usize = 36;

/// Precedence step reported when no rule matched
pub const FALLBACK_TIER: u8 = 24;

lazy_static! {
    static ref TABLE: RuleTable = RuleTable::compile(RULES);
}

/// Outcome of classifying a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub kind: IdentifierType,
    /// Name of the deciding rule; `None` when the fallback decided
    pub rule: Option<&'static str>,
    /// Precedence step of the deciding rule, [`FALLBACK_TIER`] for the fallback
    pub tier: u8,
}

struct CompiledRule {
    spec: &'static RuleSpec,
    pattern: Regex,
    unless: Option<Regex>,
}

impl CompiledRule {
    fn compile(spec: &'static RuleSpec) -> Self {
        let build = |pattern: &str| {
            Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for rule {}: {}", spec.name, e))
        };
        CompiledRule {
            spec,
            pattern: build(spec.pattern),
            unless: spec.unless.map(build),
        }
    }

    fn matches(&self, value: &str) -> bool {
        if let Some(literal) = self.spec.literal {
            let head_matches = value
                .get(..literal.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(literal));
            if !head_matches {
                return false;
            }
        }
        self.pattern.is_match(value)
            && !self.unless.as_ref().is_some_and(|unless| unless.is_match(value))
    }

    fn classification(&self) -> Classification {
        Classification {
            kind: self.spec.kind,
            rule: Some(self.spec.name),
            tier: self.spec.tier,
        }
    }
}

struct RuleTable {
    rules: Vec<CompiledRule>,
    buckets: Vec<Vec<usize>>,
}

impl RuleTable {
    fn compile(specs: &'static [RuleSpec]) -> Self {
        let rules: Vec<CompiledRule> = specs.iter().map(CompiledRule::compile).collect();
        let buckets = (0..BUCKET_COUNT)
            .map(|bucket| {
                rules
                    .iter()
                    .enumerate()
                    .filter(|(_, rule)| {
                        bucket_representative(bucket).is_some_and(|first| rule.spec.lead.admits(first))
                    })
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect();
        RuleTable { rules, buckets }
    }

    fn classify(&self, value: &str) -> Classification {
        if let Some(first) = value.chars().next() {
            for &index in &self.buckets[bucket_of(first)] {
                let rule = &self.rules[index];
                if rule.matches(value) {
                    return rule.classification();
                }
            }
        }
        Classification {
            kind: fallback(value),
            rule: None,
            tier: FALLBACK_TIER,
        }
    }

    /// Run every rule in order, ignoring the buckets
    #[cfg(test)]
    fn classify_linear(&self, value: &str) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(CompiledRule::classification)
            .unwrap_or(Classification {
                kind: fallback(value),
                rule: None,
                tier: FALLBACK_TIER,
            })
    }
}

fn bucket_of(first: char) -> usize {
    match first {
        '0'..='9' => first as usize - '0' as usize,
        'a'..='z' => 10 + (first as usize - 'a' as usize),
        'A'..='Z' => 10 + (first as usize - 'A' as usize),
        _ => OTHER_BUCKET,
    }
}

/// A character that lands in `bucket`; `None` for the catch-all bucket,
/// which no rule can start with
fn bucket_representative(bucket: usize) -> Option<char> {
    match bucket {
        0..=9 => char::from_digit(bucket as u32, 10),
        10..=35 => Some((b'a' + (bucket - 10) as u8) as char),
        _ => None,
    }
}

/// Slash-shaped single tokens read as DOIs, everything else as URLs
fn fallback(value: &str) -> IdentifierType {
    if value.contains('/') && !value.contains(char::is_whitespace) {
        IdentifierType::Doi
    } else {
        IdentifierType::Url
    }
}

/// Classify a string and report which rule decided
pub fn classify(value: &str) -> Classification {
    TABLE.classify(value.trim())
}

/// Detect the identifier type of a string
///
/// Never fails: input that no rule recognises is a DOI when it is a single
/// slash-containing token and a URL otherwise.
///
/// # Examples
/// ```
/// use curate_identifiers::{detect, IdentifierType};
/// assert_eq!(detect("10.60516/sample123"), IdentifierType::Igsn);
/// assert_eq!(detect("ark:/13960/t5z64fc55"), IdentifierType::Ark);
/// assert_eq!(detect("not a valid identifier at all"), IdentifierType::Url);
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn detect(value: &str) -> IdentifierType {
    classify(value).kind
}

/// Rule names in precedence order
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|spec| spec.name).collect()
}
