use crate::error::*;
use crate::tac::{Operand, Operator};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A single TAC instruction `result = operand1 [operator operand2]`.
///
/// `operand2` is present if and only if `operator` is binary.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstruction")]
pub struct Instruction {
    #[serde(rename = "op")]
    operator: Operator,
    #[serde(rename = "arg1")]
    operand1: Operand,
    #[serde(rename = "arg2", skip_serializing_if = "Option::is_none")]
    operand2: Option<Operand>,
    result: String,
}

impl Instruction {
    /// Create a new `Instruction`, checking the shape invariants.
    pub fn new<S>(
        operator: Operator,
        operand1: Operand,
        operand2: Option<Operand>,
        result: S,
    ) -> Result<Self>
    where
        S: Into<String>,
    {
        let result = result.into();
        if result.is_empty() {
            return Err(ErrorKind::InvalidInstruction("empty result name".to_string()).into());
        }
        if operand1.is_empty() {
            return Err(ErrorKind::InvalidInstruction(format!(
                "empty first operand in definition of `{}`",
                result
            ))
            .into());
        }
        match (&operand2, operator.is_binary()) {
            (Some(operand), true) if operand.is_empty() => {
                return Err(ErrorKind::InvalidInstruction(format!(
                    "empty second operand in definition of `{}`",
                    result
                ))
                .into())
            }
            (None, true) => {
                return Err(ErrorKind::InvalidInstruction(format!(
                    "operator `{}` in definition of `{}` requires a second operand",
                    operator, result
                ))
                .into())
            }
            (Some(_), false) => {
                return Err(ErrorKind::InvalidInstruction(format!(
                    "plain assignment to `{}` takes no second operand",
                    result
                ))
                .into())
            }
            _ => (),
        }

        Ok(Self {
            operator,
            operand1,
            operand2,
            result,
        })
    }

    /// Create a new plain assignment `result = operand`.
    pub fn assign<S>(result: S, operand: Operand) -> Result<Self>
    where
        S: Into<String>,
    {
        Self::new(Operator::Assign, operand, None, result)
    }

    /// Create a new binary instruction `result = lhs operator rhs`.
    pub fn compute<S>(result: S, operator: Operator, lhs: Operand, rhs: Operand) -> Result<Self>
    where
        S: Into<String>,
    {
        Self::new(operator, lhs, Some(rhs), result)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand1(&self) -> &Operand {
        &self.operand1
    }

    pub fn operand2(&self) -> Option<&Operand> {
        self.operand2.as_ref()
    }

    /// Name of the variable defined by this instruction.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns a copy of this instruction with its operands replaced.
    ///
    /// The operator and result are kept, so the shape invariants still hold.
    pub fn with_operands(&self, operand1: Operand, operand2: Option<Operand>) -> Self {
        Self {
            operator: self.operator,
            operand1,
            operand2: operand2.filter(|_| self.operator.is_binary()),
            result: self.result.clone(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.operand2 {
            Some(operand2) => write!(
                f,
                "{} = {} {} {}",
                self.result, self.operand1, self.operator, operand2
            ),
            None => write!(f, "{} = {}", self.result, self.operand1),
        }
    }
}

#[derive(Deserialize)]
struct RawInstruction {
    #[serde(rename = "op", default)]
    operator: Operator,
    #[serde(rename = "arg1")]
    operand1: Operand,
    #[serde(rename = "arg2", default)]
    operand2: Option<Operand>,
    result: String,
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = Error;

    fn try_from(raw: RawInstruction) -> Result<Self> {
        Self::new(raw.operator, raw.operand1, raw.operand2, raw.result)
    }
}
