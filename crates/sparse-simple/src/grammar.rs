use sparse::{Context, Grammar, SparseError};

/// Token name every parse starts in.
pub const START: &str = "init";

pub const VARIABLE_NAME: &str = "variable-name";
pub const VARIABLE_VALUE: &str = "variable-value";

/// The simple-language grammar.
///
/// Parentheses and whitespace are dropped; only names and digits reach the
/// reductions.
pub fn grammar() -> Result<Grammar, SparseError> {
    Ok(Grammar::new()
        .context(
            START,
            Context::new()
                .regex("&", r"\s+")?
                .regex(VARIABLE_NAME, "[A-Za-z0-9_]+")?,
        )
        .context(
            VARIABLE_NAME,
            Context::new()
                .regex("&", r"\s+")?
                .regex("&variable-value", r"\(\s*")?,
        )
        .context(
            VARIABLE_VALUE,
            Context::new()
                .regex("@self", "[0-9]+")?
                .regex("&init", r"\s*\)")?,
        ))
}
