//! Grammar model: named token contexts, each an ordered list of rules.
//!
//! Rules are written with the compact test-key notation and decoded once,
//! when the rule is added:
//!
//! | key       | transition                                              |
//! |-----------|---------------------------------------------------------|
//! | `&`       | skip the match, no reduction                            |
//! | `&name`   | switch to `name` silently, no reduction                 |
//! | `@self`   | reduce under the current token name                     |
//! | `name`    | switch to `name` and reduce under it                    |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::pattern::Pattern;
use crate::SparseError;

/// What the engine does after a rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `&`
    Skip,
    /// `&name`
    SilentGoto(String),
    /// `@self`
    SelfProduce,
    /// `name`
    Produce(String),
}

impl Transition {
    /// Whether a match under this transition invokes the reduction callback.
    pub fn produces(&self) -> bool {
        matches!(self, Transition::SelfProduce | Transition::Produce(_))
    }
}

impl FromStr for Transition {
    type Err = SparseError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "" => Err(SparseError::configuration("empty test-key")),
            "&" => Ok(Transition::Skip),
            "@self" => Ok(Transition::SelfProduce),
            _ => match key.strip_prefix('&') {
                Some(target) => Ok(Transition::SilentGoto(target.to_string())),
                None => Ok(Transition::Produce(key.to_string())),
            },
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Skip => write!(f, "&"),
            Transition::SilentGoto(name) => write!(f, "&{name}"),
            Transition::SelfProduce => write!(f, "@self"),
            Transition::Produce(name) => write!(f, "{name}"),
        }
    }
}

/// One (test-key, pattern) pair of a context.
#[derive(Debug, Clone)]
pub struct Rule {
    pub transition: Transition,
    pub pattern: Pattern,
}

impl Rule {
    pub fn new(transition: Transition, pattern: Pattern) -> Self {
        Self {
            transition,
            pattern,
        }
    }
}

/// The ordered candidate rules for one token name. Declaration order is
/// match priority: the first rule that matches wins.
#[derive(Debug, Clone, Default)]
pub struct Context {
    rules: Vec<Rule>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule with a regular-expression pattern.
    pub fn regex(self, key: &str, source: &str) -> Result<Self, SparseError> {
        let pattern = Pattern::regex(source)?;
        self.rule(key, pattern)
    }

    /// Append a rule with a literal pattern.
    pub fn literal(self, key: &str, text: &str) -> Result<Self, SparseError> {
        self.rule(key, Pattern::literal(text))
    }

    /// Append a rule, decoding its test-key.
    pub fn rule(mut self, key: &str, pattern: Pattern) -> Result<Self, SparseError> {
        let transition = key.parse()?;
        self.push(Rule::new(transition, pattern));
        Ok(self)
    }

    /// Append an already-decoded rule after the existing ones.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Token name → context. Not validated: a transition to a missing name only
/// fails when the engine enters it.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    contexts: HashMap<String, Context>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the context for `name`.
    pub fn context(mut self, name: impl Into<String>, context: Context) -> Self {
        self.insert(name, context);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, context: Context) -> Option<Context> {
        self.contexts.insert(name.into(), context)
    }

    pub fn get(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transition(key: &str) -> Transition {
        key.parse().unwrap()
    }

    // =========================================================================
    // Test-key decoding
    // =========================================================================

    #[test]
    fn test_bare_ampersand_is_skip() {
        assert_eq!(transition("&"), Transition::Skip);
    }

    #[test]
    fn test_ampersand_name_is_silent_goto() {
        assert_eq!(
            transition("&variable-value"),
            Transition::SilentGoto("variable-value".into())
        );
    }

    #[test]
    fn test_self_key() {
        assert_eq!(transition("@self"), Transition::SelfProduce);
    }

    #[test]
    fn test_plain_name_is_produce() {
        assert_eq!(transition("name"), Transition::Produce("name".into()));
    }

    #[test]
    fn test_other_at_keys_are_plain_names() {
        assert_eq!(transition("@other"), Transition::Produce("@other".into()));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = "".parse::<Transition>().unwrap_err();
        assert!(matches!(err, SparseError::Configuration { .. }));
    }

    #[test]
    fn test_display_round_trips_notation() {
        for key in ["&", "&init", "@self", "name"] {
            assert_eq!(transition(key).to_string(), key);
        }
    }

    #[test]
    fn test_produces() {
        assert!(!Transition::Skip.produces());
        assert!(!Transition::SilentGoto("x".into()).produces());
        assert!(Transition::SelfProduce.produces());
        assert!(Transition::Produce("x".into()).produces());
    }

    // =========================================================================
    // Contexts and grammar
    // =========================================================================

    #[test]
    fn test_context_keeps_declaration_order() {
        let ctx = Context::new()
            .regex("&", r"\s+")
            .unwrap()
            .literal("open", "(")
            .unwrap()
            .regex("@self", r"\d+")
            .unwrap();
        let keys: Vec<String> = ctx.rules().iter().map(|r| r.transition.to_string()).collect();
        assert_eq!(keys, vec!["&", "open", "@self"]);
    }

    #[test]
    fn test_push_appends_decoded_rule() {
        let mut ctx = Context::new().literal("&", " ").unwrap();
        ctx.push(Rule::new(Transition::SelfProduce, Pattern::literal("x")));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.rules()[1].transition, Transition::SelfProduce);
        assert_eq!(ctx.rules()[1].pattern.match_start("xy"), Some("x"));
    }

    #[test]
    fn test_context_rejects_bad_regex() {
        let result = Context::new().regex("name", "[a-");
        assert!(matches!(result, Err(SparseError::Configuration { .. })));
    }

    #[test]
    fn test_grammar_lookup() {
        let grammar = Grammar::new()
            .context("init", Context::new().literal("a", "a").unwrap())
            .context("other", Context::new());
        assert_eq!(grammar.len(), 2);
        assert!(grammar.contains("init"));
        assert_eq!(grammar.get("init").map(Context::len), Some(1));
        assert!(grammar.get("missing").is_none());
    }

    #[test]
    fn test_grammar_replaces_context() {
        let mut grammar = Grammar::new().context("init", Context::new());
        let previous = grammar.insert("init", Context::new().literal("a", "a").unwrap());
        assert!(previous.is_some_and(|c| c.is_empty()));
        assert_eq!(grammar.get("init").map(Context::len), Some(1));
    }

    #[test]
    fn test_grammar_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grammar>();
    }
}
