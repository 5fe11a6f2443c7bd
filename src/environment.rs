use crate::error::Result;
use crate::tac;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decides which operand texts count as integer literals.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum LiteralPolicy {
    /// Any non-empty mix of digits and `-`.
    #[serde(rename = "permissive")]
    Permissive,
    /// An optional leading `-` followed by digits.
    #[serde(rename = "strict")]
    Strict,
}

impl Default for LiteralPolicy {
    fn default() -> Self {
        Self::Permissive
    }
}

impl LiteralPolicy {
    pub fn classifies(&self, text: &str) -> bool {
        match self {
            Self::Permissive => tac::is_literal(text),
            Self::Strict => tac::is_strict_literal(text),
        }
    }
}

impl fmt::Display for LiteralPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// What to do with a literal that is classified as such but does not parse.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum MalformedLiteralPolicy {
    /// Abort the run with `ErrorKind::MalformedLiteral`.
    #[serde(rename = "reject")]
    Reject,
    /// Emit the instruction unfolded and forget its result.
    #[serde(rename = "pass_through")]
    PassThrough,
}

impl Default for MalformedLiteralPolicy {
    fn default() -> Self {
        Self::Reject
    }
}

impl fmt::Display for MalformedLiteralPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::PassThrough => write!(f, "pass-through"),
        }
    }
}

#[derive(Default, Debug, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub literals: LiteralPolicy,
    #[serde(default)]
    pub malformed_literals: MalformedLiteralPolicy,
    #[serde(default = "disabled")]
    pub debug: bool,
}

impl Environment {
    pub fn from_file(path: &Path) -> Result<Environment> {
        let file = File::open(path)
            .map_err(|_| format!("Environment file '{}' could not be loaded", path.display()))?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", yaml)
    }
}

fn disabled() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_fields_are_missing() {
        let env: Environment = serde_yaml::from_str("debug: true").unwrap();

        assert_eq!(env.literals, LiteralPolicy::Permissive);
        assert_eq!(env.malformed_literals, MalformedLiteralPolicy::Reject);
        assert!(env.debug);
    }

    #[test]
    fn test_from_file() {
        // GIVEN
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "literals: strict").unwrap();
        writeln!(file, "malformed_literals: pass_through").unwrap();

        // WHEN
        let env = Environment::from_file(file.path()).unwrap();

        // THEN
        assert_eq!(env.literals, LiteralPolicy::Strict);
        assert_eq!(env.malformed_literals, MalformedLiteralPolicy::PassThrough);
        assert!(!env.debug);
    }

    #[test]
    fn test_from_missing_file_fails() {
        assert!(Environment::from_file(Path::new("/nonexistent/tacopt.env.yaml")).is_err());
    }

    #[test]
    fn test_literal_policy_classification() {
        assert!(LiteralPolicy::Permissive.classifies("1-2"));
        assert!(!LiteralPolicy::Strict.classifies("1-2"));
        assert!(LiteralPolicy::Strict.classifies("-12"));
    }
}
