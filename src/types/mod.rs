mod action;
mod document;
mod error;
mod evaluation_report;
mod field;
mod limits;
mod outcome;
mod rule;
mod ruleset;

pub use action::Action;
pub use document::Document;
pub use error::{CompileError, MalformedCandidateError};
pub use evaluation_report::EvaluationReport;
pub use field::{FieldFlags, FieldTarget};
pub use limits::Limits;
pub use outcome::Outcome;
pub use rule::Rule;
pub use ruleset::{RuleSet, RuleSetBuilder};
