//! Match criteria and the address predicate built from them.

use crate::chain::SchemeCapability;

use super::pattern::{Pattern, PatternMode};

/// What a generated address has to look like.
///
/// Built once per search and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub mode: PatternMode,
    /// Lower-cased at construction
    pub search: String,
    pub required_letters: i64,
    pub required_digits: i64,
    /// Stripped once from the front of every address before matching
    pub address_prefix: String,
}

impl MatchCriteria {
    /// Creates criteria, lower-casing the search string.
    pub fn new(
        mode: PatternMode,
        search: &str,
        required_letters: i64,
        required_digits: i64,
        address_prefix: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            search: search.to_lowercase(),
            required_letters,
            required_digits,
            address_prefix: address_prefix.into(),
        }
    }

    /// Checks the criteria against a scheme's alphabet and length limits.
    ///
    /// Returns one message per violated rule; an empty list means the
    /// criteria are acceptable.
    pub fn validate(&self, capability: &SchemeCapability) -> Vec<String> {
        capability.validate_input(&self.search, self.required_letters, self.required_digits)
    }
}

/// Decides whether an address satisfies a [`MatchCriteria`].
#[derive(Debug, Clone)]
pub struct Matcher {
    criteria: MatchCriteria,
    pattern: Pattern,
    capability: &'static SchemeCapability,
}

impl Matcher {
    /// Creates a matcher, compiling the pattern once.
    pub fn new(criteria: MatchCriteria, capability: &'static SchemeCapability) -> Self {
        let pattern = Pattern::new(criteria.mode, criteria.search.clone());
        Self {
            criteria,
            pattern,
            capability,
        }
    }

    /// Returns the compiled pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the part of `address` after one leading chain prefix.
    ///
    /// An address shorter than the prefix has an empty body; any other
    /// address without the prefix is used as is.
    #[inline]
    pub fn body<'a>(&self, address: &'a str) -> &'a str {
        let prefix = self.criteria.address_prefix.as_str();
        if address.len() < prefix.len() {
            return "";
        }
        address.strip_prefix(prefix).unwrap_or(address)
    }

    /// Matches a full address against the criteria.
    #[inline]
    pub fn matches(&self, address: &str) -> bool {
        let body = self.body(address);

        self.capability.alphabet.satisfies_requirements(
            body,
            self.criteria.required_letters,
            self.criteria.required_digits,
        ) && self.pattern.matches(body)
    }
}
