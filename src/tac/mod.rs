//! Three-address code (TAC)

mod instruction;
mod names;
mod operand;
mod operator;
mod program;

pub use self::instruction::Instruction;
pub use self::names::NameGenerator;
pub use self::operand::{is_literal, is_strict_literal, Operand};
pub use self::operator::Operator;
pub use self::program::Program;
