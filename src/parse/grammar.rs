use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded, separated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_till};

use super::parser::{ParsedDirective, RawOption};

// -- Pattern ----------------------------------------------------------------

fn pattern<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., '$').parse_next(input)
}

// -- Options ----------------------------------------------------------------

fn key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., |c: char| c == '=' || c == ',').parse_next(input)
}

/// Everything after the first `=` up to the next `,`, further `=` included.
fn value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('=', take_till(0.., ',')).parse_next(input)
}

fn option<'i>(input: &mut &'i str) -> ModalResult<RawOption<'i>> {
    let key = key.parse_next(input)?;
    let value = opt(value).parse_next(input)?;
    Ok(RawOption {
        key: key.trim(),
        value: value.map(str::trim),
    })
}

fn options<'i>(input: &mut &'i str) -> ModalResult<Vec<RawOption<'i>>> {
    separated(0.., option, ',').parse_next(input)
}

// -- Directive --------------------------------------------------------------

pub fn directive<'i>(input: &mut &'i str) -> ModalResult<ParsedDirective<'i>> {
    let pattern = pattern.parse_next(input)?;
    let options = opt(preceded('$', options)).parse_next(input)?;
    Ok(ParsedDirective { pattern, options })
}

// -- Magnitudes -------------------------------------------------------------

fn sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

fn digits<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    digit1.parse_next(input)
}

/// An optionally signed run of digits, saturating at the `i64` bounds.
fn integer(input: &mut &str) -> ModalResult<i64> {
    let negative = sign.parse_next(input)? == Some('-');
    let run = digits.parse_next(input)?;
    Ok(run.bytes().fold(0_i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    }))
}

/// The signed integer at the start of `text`, ignoring anything after it.
///
/// Returns `None` if `text` does not start with digits (after an optional
/// sign). Numbers outside the `i64` range saturate.
pub(crate) fn leading_integer(text: &str) -> Option<i64> {
    let mut input = text;
    integer(&mut input).ok()
}
