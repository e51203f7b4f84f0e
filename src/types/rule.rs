use std::fmt;

use super::action::Action;
use super::document::Document;
use super::error::CompileError;
use super::field::FieldFlags;
use super::limits::Limits;
use crate::Pattern;

/// One compiled directive.
///
/// Rules are produced by [`Rule::parse`] or by compiling a whole
/// [`RuleSet`](super::RuleSet), and never change afterwards. A rule without an
/// action (a bare pattern line) is accepted but never influences the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub(crate) source: String,
    pub(crate) line: usize,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) fields: FieldFlags,
    pub(crate) site: Option<String>,
    pub(crate) action: Option<Action>,
}

impl Rule {
    /// Compile a single directive line.
    ///
    /// ```
    /// use goggles::{Action, Rule};
    ///
    /// let rule = Rule::parse("/posts/$boost=2,site=example.com").unwrap();
    /// assert_eq!(rule.action(), Some(Action::Boost(2)));
    /// assert_eq!(rule.site(), Some("example.com"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Pattern`] only if the regex engine rejects the
    /// translated pattern because of its size.
    pub fn parse(directive: &str) -> Result<Self, CompileError> {
        crate::compile::compile_directive(directive, 1, &Limits::default())
    }

    /// Test this rule against a document, returning its action if it fires.
    #[must_use]
    pub fn test(&self, doc: &Document) -> Option<Action> {
        crate::evaluate::test_one(self, doc)
    }

    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    #[must_use]
    pub fn fields(&self) -> FieldFlags {
        self.fields
    }

    #[must_use]
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// The directive text this rule was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based line number in the rule set source.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
