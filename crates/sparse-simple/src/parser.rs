//! Simple-language parser.
//!
//! Runs the `sparse` engine over the simple grammar and builds a `Program`
//! from its reductions. The tree lives in the reducer's own state; the cursor
//! is just a handle saying where the next token attaches.

use sparse::{Grammar, SparseError, Token};

use crate::grammar::{self, VARIABLE_NAME, VARIABLE_VALUE};
use crate::ValueError;

/// A named variable with an optional integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: Option<i64>,
}

/// Variables in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub variables: Vec<Variable>,
}

/// Where the next reduction attaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Cursor {
    #[default]
    Root,
    Variable(usize),
}

/// Simple-language parser. Holds the compiled grammar so repeated parses
/// don't recompile the regexes.
pub struct Parser {
    grammar: Grammar,
}

impl Parser {
    pub fn new() -> Result<Self, SparseError> {
        Ok(Self {
            grammar: grammar::grammar()?,
        })
    }

    /// Parse source code into a program.
    pub fn parse(source: &str) -> Result<Program, SparseError> {
        Self::new()?.parse_source(source)
    }

    /// Parse source code with this parser's grammar.
    pub fn parse_source(&self, source: &str) -> Result<Program, SparseError> {
        let mut program = Program::default();
        sparse::try_parse(source, &self.grammar, grammar::START, |cursor, token| {
            reduce(&mut program, cursor, token)
        })?;
        log::debug!("parsed {} variables", program.variables.len());
        Ok(program)
    }
}

fn reduce(program: &mut Program, cursor: Cursor, token: Token<'_>) -> Result<Cursor, ValueError> {
    match token.name {
        VARIABLE_NAME => {
            program.variables.push(Variable {
                name: token.value.to_string(),
                value: None,
            });
            Ok(Cursor::Variable(program.variables.len() - 1))
        }
        VARIABLE_VALUE => {
            let Cursor::Variable(index) = cursor else {
                return Err(ValueError::Orphan {
                    value: token.value.to_string(),
                });
            };
            let variable = &mut program.variables[index];
            let value = token.value.parse().map_err(|_| ValueError::OutOfRange {
                name: variable.name.clone(),
                value: token.value.to_string(),
            })?;
            variable.value = Some(value);
            Ok(Cursor::Root)
        }
        name => Err(ValueError::UnexpectedToken {
            name: name.to_string(),
        }),
    }
}
