/// One `key[=value]` entry of a directive's option list, trimmed.
///
/// `value` is `None` when the token has no `=`; `Some("")` when it has one
/// with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOption<'i> {
    pub key: &'i str,
    pub value: Option<&'i str>,
}

/// A directive line split into its pattern fragment and option list.
///
/// `options` is `None` when the line contains no `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDirective<'i> {
    pub pattern: &'i str,
    pub options: Option<Vec<RawOption<'i>>>,
}
