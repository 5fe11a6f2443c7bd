use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Operand of a TAC instruction: either a variable name or an integer literal
/// rendered as text.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Operand(String);

impl Operand {
    pub fn new<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self(text.into())
    }

    /// Creates a literal operand from `value`.
    pub fn literal(value: i64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lexical literal check, see [`is_literal`].
    pub fn is_literal(&self) -> bool {
        is_literal(&self.0)
    }

    /// Well-formed literal check, see [`is_strict_literal`].
    pub fn is_strict_literal(&self) -> bool {
        is_strict_literal(&self.0)
    }
}

/// Returns true if `s` is non-empty and consists only of decimal digits and `-`.
///
/// This is a lexical check: `"12-3"` and `"-"` are accepted even though they
/// do not parse as integers.
pub fn is_literal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '-')
}

/// Returns true if `s` is an optional leading `-` followed by at least one
/// decimal digit.
pub fn is_strict_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::literal(value)
    }
}

impl<'de> Deserialize<'de> for Operand {
    /// Accepts both strings and integer scalars, so `arg1: 10` and
    /// `arg1: "10"` are equivalent.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Text(String),
            Integer(i64),
        }

        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Text(text) => Self(text),
            Scalar::Integer(value) => Self::literal(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_literal_accepts_digits_and_minus() {
        assert!(is_literal("10"));
        assert!(is_literal("-5"));
        assert!(is_literal("0"));
    }

    #[test]
    fn test_is_literal_rejects_empty_and_identifiers() {
        assert!(!is_literal(""));
        assert!(!is_literal("a"));
        assert!(!is_literal("t1"));
        assert!(!is_literal("1a"));
        assert!(!is_literal("+5"));
    }

    #[test]
    fn test_is_literal_is_lexical_only() {
        assert!(is_literal("12-3"));
        assert!(is_literal("-"));
        assert!(is_literal("--1"));
    }

    #[test]
    fn test_is_strict_literal() {
        assert!(is_strict_literal("10"));
        assert!(is_strict_literal("-5"));
        assert!(!is_strict_literal(""));
        assert!(!is_strict_literal("-"));
        assert!(!is_strict_literal("12-3"));
        assert!(!is_strict_literal("--1"));
        assert!(!is_strict_literal("a"));
    }

    #[test]
    fn test_deserialize_accepts_integers_and_strings() {
        let operands: Vec<Operand> = serde_yaml::from_str("[10, \"-3\", a]").unwrap();
        assert_eq!(
            operands,
            vec![Operand::new("10"), Operand::new("-3"), Operand::new("a")]
        );
    }
}
