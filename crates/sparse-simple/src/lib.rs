//! Simple language
//!
//! A tiny language that assigns integer values to names, built on the
//! `sparse` engine. Values are optional and may span lines:
//!
//! ```text
//! ace(101) box(202) eel() goo(
//!     606
//! )
//! ```
//!
//! ```text
//! source → Parser::parse() → Program → render() → "1) The value of ace is 101."
//! ```

pub mod grammar;
pub mod parser;
pub mod render;

pub use grammar::{grammar, START};
pub use parser::{Parser, Program, Variable};
pub use render::render;

/// A reduction rejected a token the grammar accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("value {value} for '{name}' does not fit in a 64-bit integer")]
    OutOfRange { name: String, value: String },

    #[error("value {value} is not attached to a variable")]
    Orphan { value: String },

    #[error("unexpected token '{name}'")]
    UnexpectedToken { name: String },
}
