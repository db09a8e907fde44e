//! The transition engine: match, advance, transition, reduce.

use std::convert::Infallible;
use std::error::Error;

use crate::grammar::{Grammar, Transition};
use crate::position::Position;
use crate::{ParseError, SparseError, PREVIEW_LEN};

/// A named, matched unit of input handed to the reduction callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Drives one parse of one input.
///
/// Holds the remaining input, the active token name, the position, and the
/// last matched text. Cursors are threaded through [`Engine::run`] and never
/// inspected.
pub struct Engine<'g, 'i> {
    grammar: &'g Grammar,
    active: &'g str,
    rest: &'i str,
    position: Position,
    last_match: &'i str,
}

impl<'g, 'i> Engine<'g, 'i> {
    pub fn new(grammar: &'g Grammar, start: &'g str, input: &'i str) -> Self {
        Self {
            grammar,
            active: start,
            rest: input,
            position: Position::default(),
            last_match: "",
        }
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Token name whose context is consulted next.
    pub fn active(&self) -> &'g str {
        self.active
    }

    pub fn remaining(&self) -> &'i str {
        self.rest
    }

    /// Run until the input is consumed, returning the root cursor.
    ///
    /// The root is a clone of the initial `C::default()` cursor taken before
    /// the first reduction. Reductions must link their nodes to it themselves
    /// (shared handles such as `Rc<RefCell<_>>`), or keep the tree in state
    /// they capture.
    ///
    /// Rules that match the empty string are not guarded against and can loop
    /// forever.
    pub fn run<C, E, F>(&mut self, mut reduce: F) -> Result<C, SparseError>
    where
        C: Default + Clone,
        F: FnMut(C, Token<'_>) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        log::debug!(
            "parse start: token '{}', {} bytes of input",
            self.active,
            self.rest.len()
        );

        let root = C::default();
        let mut cursor = root.clone();
        while !self.rest.is_empty() {
            cursor = self.step(cursor, &mut reduce)?;
        }

        log::debug!("parse done at {}", self.position);
        Ok(root)
    }

    /// Match one rule of the active context and apply its transition.
    fn step<C, E, F>(&mut self, cursor: C, reduce: &mut F) -> Result<C, SparseError>
    where
        F: FnMut(C, Token<'_>) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let grammar = self.grammar;
        let context = grammar
            .get(self.active)
            .ok_or_else(|| SparseError::UndefinedToken {
                token: self.active.to_string(),
            })?;

        let rest = self.rest;
        for rule in context.rules() {
            let Some(matched) = rule.pattern.match_start(rest) else {
                continue;
            };

            self.rest = &rest[matched.len()..];
            self.position = self.position.advance(matched);
            self.last_match = matched;

            let action = if rule.transition.produces() {
                "reduce"
            } else {
                "drop"
            };
            log::trace!(
                "{} {} {} matched {:?} ({action}), now at {}",
                self.active,
                rule.transition,
                rule.pattern.describe(),
                matched,
                self.position
            );

            return match &rule.transition {
                Transition::Skip => Ok(cursor),
                Transition::SilentGoto(target) => {
                    self.active = target.as_str();
                    Ok(cursor)
                }
                Transition::SelfProduce => self.reduce(cursor, matched, reduce),
                Transition::Produce(name) => {
                    self.active = name.as_str();
                    self.reduce(cursor, matched, reduce)
                }
            };
        }

        Err(self.error().into())
    }

    fn reduce<C, E, F>(&self, cursor: C, value: &str, reduce: &mut F) -> Result<C, SparseError>
    where
        F: FnMut(C, Token<'_>) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        let token = Token {
            name: self.active,
            value,
        };
        reduce(cursor, token).map_err(|e| SparseError::Reduction {
            token: self.active.to_string(),
            source: e.into(),
        })
    }

    fn error(&self) -> ParseError {
        let mut preview: String = self.rest.chars().take(PREVIEW_LEN).collect();
        if self.rest.chars().nth(PREVIEW_LEN).is_some() {
            preview.push('…');
        }
        ParseError {
            token: self.active.to_string(),
            last_match: self.last_match.to_string(),
            line: self.position.line,
            column: self.position.column,
            preview,
        }
    }
}

/// Parse `input` with an infallible reduction callback.
///
/// Returns the root cursor; see [`Engine::run`] for how the root relates to the
/// cursors the callback returns.
pub fn parse<'g, C, F>(
    input: &str,
    grammar: &'g Grammar,
    start: &'g str,
    mut reduce: F,
) -> Result<C, SparseError>
where
    C: Default + Clone,
    F: FnMut(C, Token<'_>) -> C,
{
    try_parse(input, grammar, start, |cursor, token| {
        Ok::<C, Infallible>(reduce(cursor, token))
    })
}

/// Parse `input` with a reduction callback that may fail. A callback error
/// aborts the parse as [`SparseError::Reduction`].
pub fn try_parse<'g, C, E, F>(
    input: &str,
    grammar: &'g Grammar,
    start: &'g str,
    reduce: F,
) -> Result<C, SparseError>
where
    C: Default + Clone,
    F: FnMut(C, Token<'_>) -> Result<C, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    Engine::new(grammar, start, input).run(reduce)
}
