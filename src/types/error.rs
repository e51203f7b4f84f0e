use thiserror::Error;

use crate::parse::ParseError;

/// Errors raised while compiling directive lines into a [`RuleSet`](super::RuleSet).
///
/// Every variant carries the 1-based source line of the offending directive.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A line the directive grammar rejected. Unreachable with the current
    /// grammar, which accepts every line.
    #[error("line {line}: {source}")]
    Syntax {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: pattern '{pattern}' could not be compiled: {source}")]
    Pattern {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("line {line}: pattern is {len} bytes long, limit is {limit}")]
    PatternTooLong {
        line: usize,
        len: usize,
        limit: usize,
    },

    #[error("line {line}: directive has {count} options, limit is {limit}")]
    TooManyOptions {
        line: usize,
        count: usize,
        limit: usize,
    },
}

impl CompileError {
    /// The source line the error was raised for.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            CompileError::Syntax { line, .. }
            | CompileError::Pattern { line, .. }
            | CompileError::PatternTooLong { line, .. }
            | CompileError::TooManyOptions { line, .. } => *line,
        }
    }
}

/// The candidate's URL cannot be used for evaluation.
#[derive(Debug, Error)]
pub enum MalformedCandidateError {
    #[error("candidate url '{url}' is not a valid absolute url: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("candidate url '{url}' has no host")]
    MissingHost { url: String },
}
