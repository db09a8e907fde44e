//! Sparse
//!
//! A table-driven text parser. The caller supplies a [`Grammar`] of named token
//! contexts, a starting token name, and a reduction callback; the engine matches
//! patterns at the current position, advances, and hands every produced
//! [`Token`] to the callback, which builds whatever output it likes.
//!
//! # Example
//!
//! ```
//! use sparse::{Context, Grammar};
//!
//! let grammar = Grammar::new().context(
//!     "init",
//!     Context::new().regex("&", r"\s+").unwrap().regex("@self", r"\w+").unwrap(),
//! );
//!
//! let mut words = Vec::new();
//! sparse::parse("abc def", &grammar, "init", |(), token| {
//!     words.push(token.value.to_string());
//! })
//! .unwrap();
//! assert_eq!(words, ["abc", "def"]);
//! ```
//!
//! # Hazard
//!
//! There is no guard against rules that match the empty string. A context whose
//! winning rule consumes nothing (`\s*`, an empty literal) loops forever.

pub mod engine;
pub mod grammar;
pub mod pattern;
pub mod position;

pub use engine::{parse, try_parse, Engine, Token};
pub use grammar::{Context, Grammar, Rule, Transition};
pub use pattern::Pattern;
pub use position::Position;

/// Maximum number of characters of unconsumed input shown in a [`ParseError`].
pub const PREVIEW_LEN: usize = 15;

/// No rule in the active context matched at the current position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Parse error: invalid source after {token} '{last_match}' at line {line}, column {column}: '{preview}'"
)]
pub struct ParseError {
    pub token: String,
    pub last_match: String,
    pub line: usize,
    pub column: usize,
    pub preview: String,
}

/// Everything that can abort a parse.
#[derive(Debug, thiserror::Error)]
pub enum SparseError {
    /// The grammar itself is malformed (bad regex source, empty test-key).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A transition reached a token name with no context in the grammar.
    #[error("Parse error: undefined token '{token}'")]
    UndefinedToken { token: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The reduction callback rejected a token.
    #[error("Reduction failed for token '{token}': {source}")]
    Reduction {
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SparseError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        SparseError::Configuration {
            message: message.into(),
        }
    }
}
