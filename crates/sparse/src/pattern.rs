use regex::Regex;

use crate::SparseError;

/// Something that can match at the very start of the remaining input.
///
/// The set of kinds is closed: a regular expression anchored at offset 0, or a
/// literal compared by prefix equality.
#[derive(Debug, Clone)]
pub enum Pattern {
    Regex(Regex),
    Literal(String),
}

impl Pattern {
    /// Compile a regular expression, anchored so it only matches at offset 0.
    ///
    /// The source is wrapped in a non-capturing group, so alternations like
    /// `a|b` are anchored as a whole.
    pub fn regex(source: &str) -> Result<Self, SparseError> {
        let anchored = format!("^(?:{source})");
        Regex::new(&anchored)
            .map(Pattern::Regex)
            .map_err(|e| SparseError::configuration(format!("invalid regex /{source}/: {e}")))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Return the prefix of `input` this pattern matches, if any.
    pub fn match_start<'i>(&self, input: &'i str) -> Option<&'i str> {
        match self {
            Pattern::Regex(re) => re.find(input).map(|m| &input[..m.end()]),
            Pattern::Literal(text) => input.starts_with(text.as_str()).then(|| &input[..text.len()]),
        }
    }

    /// Human-readable form used in trace output.
    pub fn describe(&self) -> String {
        match self {
            Pattern::Regex(re) => {
                let source = re.as_str();
                let inner = source
                    .strip_prefix("^(?:")
                    .and_then(|s| s.strip_suffix(')'))
                    .unwrap_or(source);
                format!("/{inner}/")
            }
            Pattern::Literal(text) => format!("{text:?}"),
        }
    }
}
