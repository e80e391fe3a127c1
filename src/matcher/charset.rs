//! Character-class counting over address alphabets.

/// Counts the characters of `s` that belong to `class`.
#[inline]
pub fn count_character_class(s: &str, class: &str) -> usize {
    s.chars().filter(|c| class.contains(*c)).count()
}

/// The digit and letter classes of one address encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    pub digits: &'static str,
    pub letters: &'static str,
}

impl Alphabet {
    /// Creates an alphabet from its digit and letter classes.
    pub const fn new(digits: &'static str, letters: &'static str) -> Self {
        Self { digits, letters }
    }

    /// Counts the digits of `s`.
    pub fn count_digits(&self, s: &str) -> usize {
        count_character_class(s, self.digits)
    }

    /// Counts the letters of `s`.
    pub fn count_letters(&self, s: &str) -> usize {
        count_character_class(s, self.letters)
    }

    /// Returns true if `body` holds at least `required` digits.
    #[inline]
    pub fn check_required_digits(&self, body: &str, required: i64) -> bool {
        self.count_digits(body) as i64 >= required
    }

    /// Returns true if `body` holds at least `required` letters.
    #[inline]
    pub fn check_required_letters(&self, body: &str, required: i64) -> bool {
        self.count_letters(body) as i64 >= required
    }

    /// Returns true if every character of `s` is a digit or letter of this alphabet.
    pub fn contains_only(&self, s: &str) -> bool {
        self.count_digits(s) + self.count_letters(s) == s.chars().count()
    }

    /// "At least" semantics: no upper bound is enforced on either class.
    #[inline]
    pub fn satisfies_requirements(&self, body: &str, letters: i64, digits: i64) -> bool {
        self.check_required_digits(body, digits) && self.check_required_letters(body, letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: Alphabet = Alphabet::new("0123456789", "abcdefABCDEF");

    #[test]
    fn test_count_member_and_disjoint() {
        assert_eq!(count_character_class("abcdef123456", "abc123"), 6);
        assert_eq!(count_character_class("abcdef123456", ""), 0);
        assert_eq!(count_character_class("", "abc123"), 0);
        assert_eq!(count_character_class("abcdef123456", "!@#$%"), 0);
        assert_eq!(count_character_class("0022", HEX.digits), 4);
    }

    #[test]
    fn test_contains_only() {
        assert!(HEX.contains_only("abcdef123456"));
        assert!(HEX.contains_only(""));
        assert!(!HEX.contains_only("abcdef123456!"));
        assert!(!HEX.contains_only("xyz"));
    }

    #[test]
    fn test_requirements() {
        assert!(!HEX.satisfies_requirements("abc12", 0, 5));
        assert!(HEX.satisfies_requirements("abc12", 3, 2));
        assert!(!HEX.satisfies_requirements("abc12", 4, 2));
        assert!(HEX.satisfies_requirements("", 0, 0));
        assert!(!HEX.satisfies_requirements("", 1, 0));
    }

    #[test]
    fn test_requirements_monotonic() {
        let body = "ab12cd34";
        for letters in 0..8 {
            for digits in 0..8 {
                if !HEX.satisfies_requirements(body, letters, digits) {
                    assert!(!HEX.satisfies_requirements(body, letters + 1, digits));
                    assert!(!HEX.satisfies_requirements(body, letters, digits + 1));
                }
            }
        }
    }
}
