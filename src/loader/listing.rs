//! TAC listing format
//!
//! One instruction per line, written the way programs are printed:
//!
//! ```text
//! a = 10
//! t1 = a + b    // comment
//! ```
//!
//! Operators must be surrounded by whitespace, so `x = a -1` is rejected and
//! `x = a - -1` subtracts a negative literal.

use crate::error::*;
use crate::loader::Loader;
use crate::tac::{Instruction, Operand, Operator, Program};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, one_of, space0, space1},
    combinator::{all_consuming, map, map_opt, opt},
    sequence::{preceded, tuple},
    IResult,
};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ListingLoader {
    file_path: PathBuf,
}

impl ListingLoader {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_owned(),
        }
    }
}

impl Loader for ListingLoader {
    fn load_program(&self) -> Result<Program> {
        let source = fs::read_to_string(&self.file_path).map_err(|_| {
            format!(
                "Program file '{}' could not be loaded",
                self.file_path.display()
            )
        })?;
        parse_listing(&source)
    }
}

/// Parses a TAC listing into a program.
pub fn parse_listing(source: &str) -> Result<Program> {
    let mut program = Program::new();

    for (index, line) in source.lines().enumerate() {
        let code = match line.find("//") {
            Some(comment) => &line[..comment],
            None => line,
        };
        if code.trim().is_empty() {
            continue;
        }

        let (_, (result, operand1, rhs)) = all_consuming(instruction)(code).map_err(|_| {
            ErrorKind::Syntax(index + 1, format!("cannot parse `{}`", code.trim()))
        })?;

        let (operator, operand2) = match rhs {
            Some((operator, operand2)) => (operator, Some(operand2)),
            None => (Operator::Assign, None),
        };
        program.push(Instruction::new(operator, operand1, operand2, result)?);
    }

    Ok(program)
}

type ParsedInstruction<'a> = (&'a str, Operand, Option<(Operator, Operand)>);

fn instruction(input: &str) -> IResult<&str, ParsedInstruction> {
    let (input, _) = space0(input)?;
    let (input, result) = identifier(input)?;
    let (input, _) = tuple((space0, char('='), space0))(input)?;
    let (input, operand1) = operand(input)?;
    let (input, rhs) = opt(binary)(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (result, operand1, rhs)))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

fn operand(input: &str) -> IResult<&str, Operand> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        Operand::new,
    )(input)
}

fn binary(input: &str) -> IResult<&str, (Operator, Operand)> {
    let (input, operator) = preceded(space1, map_opt(one_of("+-*/"), Operator::from_symbol))(input)?;
    let (input, _) = space1(input)?;
    let (input, operand2) = operand(input)?;
    Ok((input, (operator, operand2)))
}
