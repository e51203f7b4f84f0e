use crate::parse::{ParsedDirective, RawOption, leading_integer};
use crate::{Action, CompileError, FieldFlags, FieldTarget, Limits, Pattern, Rule};

pub(crate) fn compile(lines: &[String], limits: &Limits) -> Result<Vec<Rule>, CompileError> {
    let rules = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| compile_directive(line, i + 1, limits))
        .collect::<Result<Vec<Rule>, CompileError>>()?;

    log::debug!(
        "compiled {} rules from {} source lines",
        rules.len(),
        lines.len()
    );
    Ok(rules)
}

pub(crate) fn compile_directive(
    source: &str,
    line: usize,
    limits: &Limits,
) -> Result<Rule, CompileError> {
    let parsed =
        crate::parse::parse(source).map_err(|source| CompileError::Syntax { line, source })?;
    check_limits(&parsed, line, limits)?;

    let pattern = if parsed.pattern.is_empty() {
        None
    } else {
        let compiled = Pattern::compile(parsed.pattern).map_err(|source| CompileError::Pattern {
            line,
            pattern: parsed.pattern.to_owned(),
            source,
        })?;
        Some(compiled)
    };

    let options = parsed
        .options
        .as_deref()
        .map(Options::collect)
        .unwrap_or_default();

    let explicit_fields = !options.fields.is_empty();
    let constrained = options.site_key || explicit_fields || pattern.is_some();
    let fields = if explicit_fields {
        options.fields
    } else {
        FieldFlags::from(FieldTarget::Url)
    };
    let site = options.site.map(str::to_owned);

    if options.action_keys() > 1 {
        log::warn!("line {line}: several action keys in '{source}', keeping the highest priority one");
    }

    let action = if let Some(value) = options.boost {
        Some(Action::Boost(magnitude(value)))
    } else if let Some(value) = options.downrank {
        Some(Action::Downrank(magnitude(value).saturating_neg()))
    } else if options.discard {
        if constrained {
            Some(Action::SpecificDiscard)
        } else {
            Some(Action::GenericDiscard)
        }
    } else {
        None
    };

    log::trace!("line {line}: '{source}' -> {action:?}, fields {fields}, site {site:?}");

    Ok(Rule {
        source: source.to_owned(),
        line,
        pattern,
        fields,
        site,
        action,
    })
}

fn check_limits(
    parsed: &ParsedDirective<'_>,
    line: usize,
    limits: &Limits,
) -> Result<(), CompileError> {
    if let Some(limit) = limits.max_pattern_len
        && parsed.pattern.len() > limit
    {
        return Err(CompileError::PatternTooLong {
            line,
            len: parsed.pattern.len(),
            limit,
        });
    }
    if let Some(limit) = limits.max_options
        && let Some(options) = &parsed.options
        && options.len() > limit
    {
        return Err(CompileError::TooManyOptions {
            line,
            count: options.len(),
            limit,
        });
    }
    Ok(())
}

/// Magnitude of a `boost` or `downrank` option. A bare key (or one with an
/// empty value) counts as 1; a value with no leading integer counts as 0.
/// Values outside the `i64` range saturate.
fn magnitude(value: &str) -> i64 {
    if value.is_empty() {
        1
    } else {
        leading_integer(value).unwrap_or(0)
    }
}

/// The recognised options of one directive. A repeated key keeps its last value.
///
/// `site_key` records that a `site` option was written at all: a `site` with
/// no value scopes nothing but still makes a discard specific.
#[derive(Debug, Default)]
struct Options<'i> {
    site: Option<&'i str>,
    site_key: bool,
    fields: FieldFlags,
    boost: Option<&'i str>,
    downrank: Option<&'i str>,
    discard: bool,
}

impl<'i> Options<'i> {
    fn collect(raw: &[RawOption<'i>]) -> Self {
        let mut options = Self::default();
        for opt in raw {
            let value = opt.value.unwrap_or_default();
            match opt.key {
                "site" => {
                    options.site_key = true;
                    options.site = (!value.is_empty()).then_some(value);
                }
                "boost" => options.boost = Some(value),
                "downrank" => options.downrank = Some(value),
                "discard" => options.discard = true,
                key => match FieldTarget::from_key(key) {
                    Some(target) => options.fields.insert(target),
                    None => log::trace!("ignoring unknown option '{key}'"),
                },
            }
        }
        options
    }

    fn action_keys(&self) -> usize {
        usize::from(self.boost.is_some())
            + usize::from(self.downrank.is_some())
            + usize::from(self.discard)
    }
}
