use thiserror::Error;

use crate::{CompileError, MalformedCandidateError};

/// Unified error type covering compilation, candidate construction, and I/O.
///
/// Returned by convenience methods like [`RuleSet::from_file()`](crate::RuleSet::from_file).
#[derive(Debug, Error)]
pub enum GogglesError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    MalformedCandidate(#[from] MalformedCandidateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
