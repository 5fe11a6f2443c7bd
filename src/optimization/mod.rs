//! Optimizations on TAC programs

mod constant_environment;
mod constant_folding;

pub use self::constant_environment::ConstantEnvironment;
pub use self::constant_folding::{ConstantFolding, ConstantFoldingBuilder, Folding, Optimized};
