use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    /// Plain assignment `result = operand1`.
    #[serde(rename = "none")]
    Assign,
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Sub,
    #[serde(rename = "mul")]
    Mul,
    #[serde(rename = "div")]
    Div,
}

impl Default for Operator {
    fn default() -> Self {
        Self::Assign
    }
}

impl Operator {
    /// Returns the binary operator denoted by `symbol` in a TAC listing.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn is_assign(&self) -> bool {
        matches!(self, Self::Assign)
    }

    pub fn is_binary(&self) -> bool {
        !self.is_assign()
    }

    /// Evaluates the binary operator on `lhs` and `rhs`.
    ///
    /// Arithmetic wraps on overflow and division truncates toward zero.
    /// Returns `None` for `Assign` and for division by zero.
    pub fn evaluate(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Assign => None,
            Self::Add => Some(lhs.wrapping_add(rhs)),
            Self::Sub => Some(lhs.wrapping_sub(rhs)),
            Self::Mul => Some(lhs.wrapping_mul(rhs)),
            Self::Div => {
                if rhs == 0 {
                    None
                } else {
                    Some(lhs.wrapping_div(rhs))
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign => write!(f, "="),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}
