use crate::error::Result;
use crate::tac::{Instruction, NameGenerator, Operand, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// An ordered sequence of TAC instructions.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            instructions: vec![],
        }
    }

    /// Returns a reference to the instruction at the given index.
    pub fn instruction(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Returns a reference to all instructions of this program.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Adds an instruction to the end of this program.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Adds a plain assignment to the end of this program.
    pub fn assign<S>(&mut self, result: S, operand: Operand) -> Result<()>
    where
        S: Into<String>,
    {
        self.instructions.push(Instruction::assign(result, operand)?);
        Ok(())
    }

    /// Adds a binary instruction to the end of this program.
    pub fn compute<S>(
        &mut self,
        result: S,
        operator: Operator,
        lhs: Operand,
        rhs: Operand,
    ) -> Result<()>
    where
        S: Into<String>,
    {
        self.instructions
            .push(Instruction::compute(result, operator, lhs, rhs)?);
        Ok(())
    }

    /// Adds `t = lhs operator rhs` for a fresh temporary `t` taken from `names`
    /// and returns `t` as an operand.
    pub fn compute_temporary(
        &mut self,
        names: &mut NameGenerator,
        operator: Operator,
        lhs: Operand,
        rhs: Operand,
    ) -> Result<Operand> {
        let temporary = names.temporary();
        self.compute(temporary.clone(), operator, lhs, rhs)?;
        Ok(Operand::new(temporary))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in self.instructions() {
            writeln!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl IntoIterator for Program {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_listing() {
        // GIVEN
        let mut program = Program::new();
        program.assign("a", Operand::literal(10)).unwrap();
        program
            .compute("t1", Operator::Sub, "a".into(), Operand::literal(-2))
            .unwrap();

        // WHEN
        let listing = program.to_string();

        // THEN
        assert_eq!(listing, "a = 10\nt1 = a - -2\n");
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_compute_temporary_uses_given_generator() {
        // GIVEN
        let mut names = NameGenerator::new();
        let mut program = Program::new();

        // WHEN
        let t1 = program
            .compute_temporary(&mut names, Operator::Add, "a".into(), "b".into())
            .unwrap();
        let t2 = program
            .compute_temporary(&mut names, Operator::Mul, t1.clone(), Operand::literal(2))
            .unwrap();

        // THEN
        assert_eq!(t1, Operand::new("t1"));
        assert_eq!(t2, Operand::new("t2"));
        assert_eq!(program.to_string(), "t1 = a + b\nt2 = t1 * 2\n");
    }
}
