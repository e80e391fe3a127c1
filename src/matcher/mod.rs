//! Address matching.
//!
//! An address matches when, after its chain prefix is stripped:
//! - it holds at least the required number of letters and digits
//! - the search string is found according to the pattern mode
//!   (contains, starts-with, ends-with or regex)

mod charset;
mod criteria;
mod pattern;

pub use charset::{count_character_class, Alphabet};
pub use criteria::{MatchCriteria, Matcher};
pub use pattern::{Pattern, PatternMode};
