//! Pattern matching implementation.

use std::str::FromStr;

use regex::Regex;

/// How the search string is located in an address body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMode {
    /// Match anywhere in the body
    #[default]
    Contains,
    /// Match at the beginning of the body
    StartsWith,
    /// Match at the end of the body
    EndsWith,
    /// Treat the search string as a regular expression
    Regex,
}

impl PatternMode {
    /// All mode names accepted on the command line.
    pub const NAMES: [&'static str; 4] = ["contains", "starts-with", "ends-with", "regex"];
}

impl FromStr for PatternMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(PatternMode::Contains),
            "starts-with" => Ok(PatternMode::StartsWith),
            "ends-with" => Ok(PatternMode::EndsWith),
            "regex" => Ok(PatternMode::Regex),
            _ => Err(format!(
                "Invalid matcher mode {:?}. Must be one of: {}",
                s,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl std::fmt::Display for PatternMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternMode::Contains => write!(f, "contains"),
            PatternMode::StartsWith => write!(f, "starts-with"),
            PatternMode::EndsWith => write!(f, "ends-with"),
            PatternMode::Regex => write!(f, "regex"),
        }
    }
}

/// A compiled pattern for efficient matching.
#[derive(Debug, Clone)]
pub struct Pattern {
    mode: PatternMode,
    search: String,
    /// Compiled expression in regex mode; `None` if it failed to compile
    regex: Option<Regex>,
}

impl Pattern {
    /// Creates a new pattern. The search string is used as given.
    pub fn new(mode: PatternMode, search: impl Into<String>) -> Self {
        let search = search.into();
        let regex = match mode {
            PatternMode::Regex => Regex::new(&search).ok(),
            _ => None,
        };

        Self {
            mode,
            search,
            regex,
        }
    }

    /// Returns the pattern mode.
    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// Returns the search string.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns false if this is a regex pattern whose expression did not compile.
    pub fn is_well_formed(&self) -> bool {
        self.mode != PatternMode::Regex || self.regex.is_some()
    }

    /// Matches an address body against this pattern.
    ///
    /// A malformed regular expression never matches.
    #[inline]
    pub fn matches(&self, body: &str) -> bool {
        match self.mode {
            PatternMode::Contains => body.contains(self.search.as_str()),
            PatternMode::StartsWith => body.starts_with(self.search.as_str()),
            PatternMode::EndsWith => body.ends_with(self.search.as_str()),
            PatternMode::Regex => self.regex.as_ref().is_some_and(|re| re.is_match(body)),
        }
    }
}
