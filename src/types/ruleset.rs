use std::fmt;

use super::action::Action;
use super::document::Document;
use super::error::{CompileError, MalformedCandidateError};
use super::evaluation_report::EvaluationReport;
use super::limits::Limits;
use super::outcome::Outcome;
use super::rule::Rule;

/// Builder for constructing a [`RuleSet`].
///
/// Directive lines are collected in order and compiled into an immutable,
/// thread-safe rule set. Blank lines are kept so that reported line numbers
/// match the source, and are skipped at compile time.
///
/// # Example
///
/// ```
/// use goggles::{Limits, RuleSetBuilder};
///
/// let ruleset = RuleSetBuilder::new()
///     .limits(Limits::new().max_pattern_len(512))
///     .directive("$boost=2,site=example.com")
///     .directive("/tracking/*$discard")
///     .compile()
///     .unwrap();
/// assert_eq!(ruleset.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    lines: Vec<String>,
    limits: Limits,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one directive line.
    #[must_use]
    pub fn directive(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    /// Append every line of a multi-line directive source.
    #[must_use]
    pub fn directives(mut self, text: &str) -> Self {
        self.lines.extend(text.lines().map(str::to_owned));
        self
    }

    /// Set the input bounds checked during compilation.
    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Compile the collected lines into an immutable `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if a line exceeds the configured limits or its
    /// pattern is too large for the regex engine.
    pub fn compile(self) -> Result<RuleSet, CompileError> {
        let rules = crate::compile::compile(&self.lines, &self.limits)?;
        Ok(RuleSet { rules })
    }
}

/// A compiled, immutable rule set. Thread-safe and designed to live behind `Arc`.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile a multi-line directive source, one rule per non-blank line.
    ///
    /// # Errors
    ///
    /// See [`RuleSetBuilder::compile()`].
    pub fn from_text(text: &str) -> Result<Self, CompileError> {
        RuleSetBuilder::new().directives(text).compile()
    }

    /// Compile a sequence of directive lines.
    ///
    /// # Errors
    ///
    /// See [`RuleSetBuilder::compile()`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(RuleSetBuilder::new(), |b, line| b.directive(line.as_ref()))
            .compile()
    }

    /// Read a directive file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`GogglesError`](crate::GogglesError) on I/O or compile failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GogglesError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text)?)
    }

    /// Evaluate this rule set against a document.
    ///
    /// Returns [`Outcome::NoOpinion`] when no rule with an action fires,
    /// otherwise the outcome of the highest-precedence action among those
    /// that fired.
    pub fn evaluate(&self, doc: &Document) -> Outcome {
        crate::evaluate::evaluate(&self.rules, doc)
    }

    /// Build a [`Document`] from a bare URL and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCandidateError`] if the URL has no usable host.
    pub fn evaluate_url(&self, url: &str) -> Result<Outcome, MalformedCandidateError> {
        let doc = Document::new(url)?;
        Ok(self.evaluate(&doc))
    }

    /// Evaluate with diagnostics.
    ///
    /// Returns an [`EvaluationReport`] with the outcome, the lines of the rules
    /// that fired, the winning line and timing information.
    pub fn evaluate_detailed(&self, doc: &Document) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.rules, doc)
    }

    /// The compiled rules in source order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut boost, mut downrank, mut discard, mut inert) = (0, 0, 0, 0);
        for rule in &self.rules {
            match rule.action {
                None => inert += 1,
                Some(action) if action.is_discard() => discard += 1,
                Some(Action::Boost(_)) => boost += 1,
                Some(_) => downrank += 1,
            }
        }
        write!(
            f,
            "RuleSet({} rules, {boost} boost, {downrank} downrank, {discard} discard, {inert} inert)",
            self.rules.len(),
        )
    }
}
