#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate error_chain;
extern crate nom;
extern crate serde;
extern crate serde_yaml;

pub mod environment;
pub mod loader;
pub mod optimization;
pub mod tac;
pub mod util;

pub mod error {
    error_chain! {
        types {
            Error, ErrorKind, ResultExt, Result;
        }

        foreign_links {
            IOError(::std::io::Error);
            SerdeYAML(::serde_yaml::Error);
        }

        errors {
            MalformedLiteral(literal: String) {
                description("Malformed integer literal")
                display("Malformed literal: `{}` is not a valid integer", literal)
            }
            InvalidInstruction(m: String) {
                description("Invalid TAC instruction")
                display("Invalid instruction: {}", m)
            }
            Syntax(line: usize, m: String) {
                description("Syntax error in TAC listing")
                display("Syntax error at line {}: {}", line, m)
            }
        }
    }
}
