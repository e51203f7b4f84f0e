mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::{ParsedDirective, RawOption};

pub(crate) use grammar::leading_integer;

/// Split a directive line into its pattern fragment and raw options.
///
/// The grammar accepts every input: text before the first `$` is the pattern,
/// text after it is a comma separated option list.
///
/// # Errors
///
/// Never fails with the current grammar, which accepts every line. A
/// [`ParseError`] is only possible if the grammar gains a rule that rejects
/// input.
pub fn parse(line: &str) -> Result<ParsedDirective<'_>, ParseError> {
    use winnow::Parser;
    grammar::directive
        .parse(line)
        .map_err(|e| ParseError::new(e.to_string()))
}
