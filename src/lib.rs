//! A compiled search-ranking directive language.
//!
//! Each directive line pairs an optional URL/text pattern with options that
//! scope it and say what to do with a matching result:
//!
//! ```text
//! /docs/*$boost=3,site=example.com
//! |https://spam.|$discard
//! cheap pills$intitle,downrank=2
//! ```
//!
//! A [`RuleSet`] is compiled once and evaluated against any number of
//! [`Document`]s, yielding an [`Outcome`].
//!
//! ```
//! use goggles::{Document, Outcome, RuleSet};
//!
//! let ruleset = RuleSet::from_text("/posts/$boost=3\n$site=example.com,downrank=3").unwrap();
//! let doc = Document::new("https://example.com/posts/1").unwrap();
//! assert_eq!(ruleset.evaluate(&doc), Outcome::Score(3));
//! ```

mod compile;
mod error;
mod evaluate;
pub mod parse;
mod pattern;
mod types;

pub use error::GogglesError;
pub use pattern::Pattern;
pub use types::{
    Action, CompileError, Document, EvaluationReport, FieldFlags, FieldTarget, Limits,
    MalformedCandidateError, Outcome, Rule, RuleSet, RuleSetBuilder,
};
