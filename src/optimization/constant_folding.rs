//! Constant Folding & Propagation
//!
//! Evaluates instructions whose operands are known constants, e.g. `t = 1 + 2`
//! becomes `t = 3`, and substitutes known values for variable references.
//!
//! The program is walked once from first to last instruction. Every
//! instruction only sees the constants established by the instructions before
//! it. Instructions are never removed or inserted.

use crate::environment::{Environment, LiteralPolicy, MalformedLiteralPolicy};
use crate::error::*;
use crate::optimization::ConstantEnvironment;
use crate::tac::{Instruction, Operand, Operator, Program};
use std::fmt;

#[derive(Clone, Default, Builder, Debug)]
pub struct ConstantFolding {
    #[builder(default)]
    literals: LiteralPolicy,
    #[builder(default)]
    malformed_literals: MalformedLiteralPolicy,
}

impl ConstantFolding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_from_env(env: &Environment) -> Self {
        Self {
            literals: env.literals,
            malformed_literals: env.malformed_literals,
        }
    }

    /// Folds and propagates constants through `program`.
    pub fn optimize(&self, program: &Program) -> Result<Optimized> {
        let mut constants = ConstantEnvironment::new();
        let mut foldings = Vec::new();

        let program = program
            .instructions()
            .iter()
            .map(|instruction| {
                self.optimize_instruction(instruction, &mut constants, &mut foldings)
            })
            .collect::<Result<Program>>()?;

        Ok(Optimized { program, foldings })
    }

    fn optimize_instruction(
        &self,
        instruction: &Instruction,
        constants: &mut ConstantEnvironment,
        foldings: &mut Vec<Folding>,
    ) -> Result<Instruction> {
        let result = instruction.result();
        let operand1 = constants.resolve(instruction.operand1());
        let operand2 = instruction
            .operand2()
            .map(|operand| constants.resolve(operand));

        match operand2 {
            Some(rhs) if self.is_literal(&operand1) && self.is_literal(&rhs) => {
                let (lhs_value, rhs_value) = match (self.parse(&operand1)?, self.parse(&rhs)?) {
                    (Some(lhs_value), Some(rhs_value)) => (lhs_value, rhs_value),
                    _ => {
                        return Ok(pass_through(instruction, operand1, Some(rhs), constants));
                    }
                };

                match instruction.operator().evaluate(lhs_value, rhs_value) {
                    Some(value) => {
                        constants.bind(result, value);
                        foldings.push(Folding::new(instruction, value));
                        Instruction::assign(result, Operand::literal(value))
                    }
                    None => {
                        // Division by zero: keep the original operands.
                        constants.forget(result);
                        Ok(instruction.clone())
                    }
                }
            }
            None if self.is_literal(&operand1) => match self.parse(&operand1)? {
                Some(value) => {
                    constants.bind(result, value);
                    Ok(instruction.with_operands(operand1, None))
                }
                None => Ok(pass_through(instruction, operand1, None, constants)),
            },
            operand2 => Ok(pass_through(instruction, operand1, operand2, constants)),
        }
    }

    fn is_literal(&self, operand: &Operand) -> bool {
        self.literals.classifies(operand.as_str())
    }

    /// Parses a literal operand.
    ///
    /// Returns `Ok(None)` if the text does not parse and malformed literals
    /// are passed through.
    fn parse(&self, operand: &Operand) -> Result<Option<i64>> {
        match operand.as_str().parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => match self.malformed_literals {
                MalformedLiteralPolicy::Reject => {
                    Err(ErrorKind::MalformedLiteral(operand.to_string()).into())
                }
                MalformedLiteralPolicy::PassThrough => Ok(None),
            },
        }
    }
}

/// Emits `instruction` with its resolved operands; its result is no longer
/// known to be constant.
fn pass_through(
    instruction: &Instruction,
    operand1: Operand,
    operand2: Option<Operand>,
    constants: &mut ConstantEnvironment,
) -> Instruction {
    constants.forget(instruction.result());
    instruction.with_operands(operand1, operand2)
}

/// Record of a single folded instruction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Folding {
    result: String,
    operator: Operator,
    operand1: Operand,
    operand2: Option<Operand>,
    value: i64,
}

impl Folding {
    fn new(instruction: &Instruction, value: i64) -> Self {
        Self {
            result: instruction.result().to_owned(),
            operator: instruction.operator(),
            operand1: instruction.operand1().clone(),
            operand2: instruction.operand2().cloned(),
            value,
        }
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// First operand as written in the original instruction.
    pub fn operand1(&self) -> &Operand {
        &self.operand1
    }

    /// Second operand as written in the original instruction.
    pub fn operand2(&self) -> Option<&Operand> {
        self.operand2.as_ref()
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Folding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Folded {} {}", self.operand1, self.operator)?;
        if let Some(operand2) = &self.operand2 {
            write!(f, " {}", operand2)?;
        }
        write!(f, " -> {}", self.value)
    }
}

/// Outcome of a constant folding run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Optimized {
    program: Program,
    foldings: Vec<Folding>,
}

impl Optimized {
    /// The optimized program, one instruction per input instruction.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// All foldings in the order they happened.
    pub fn foldings(&self) -> &[Folding] {
        &self.foldings
    }

    pub fn into_program(self) -> Program {
        self.program
    }
}
