use std::fmt;

use regex::Regex;

/// Regex emitted for `*`: any run of characters, newlines included.
const WILDCARD: &str = "(?s:.*)";

/// Regex emitted for `^`: one character that cannot appear inside a URL
/// component, or the end of the text.
const SEPARATOR: &str = r"(?:[^0-9A-Za-z_.%\-]|$)";

/// A compiled directive pattern.
///
/// Patterns are written in a small glob language:
///
/// | token | meaning |
/// |-------|---------|
/// | `\|` (leading) | anchor to the start of the text |
/// | `\|` (trailing) | anchor to the end of the text |
/// | `*` | any sequence of characters |
/// | `^` | a separator character, or the end of the text |
///
/// Everything else matches literally. Without anchors a pattern matches
/// anywhere inside the text.
///
/// ```
/// use goggles::Pattern;
///
/// let p = Pattern::compile("|https://en.").unwrap();
/// assert!(p.is_match("https://en.wikipedia.org"));
/// assert!(!p.is_match("https://de.wikipedia.org"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern fragment.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] only when the translated expression exceeds the
    /// regex engine's size limit; ordinary fragments always compile.
    pub fn compile(fragment: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&translate(fragment))?;
        Ok(Self {
            source: fragment.to_owned(),
            regex,
        })
    }

    /// Returns `true` if the pattern is found in `text`, honouring anchors.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The fragment this pattern was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The regular expression the fragment was translated into.
    #[must_use]
    pub fn regex_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translate a glob fragment into regex syntax.
///
/// The leading anchor is stripped before the trailing one is looked at, so a
/// lone `|` is a start anchor and nothing else.
fn translate(fragment: &str) -> String {
    let (anchor_start, body) = match fragment.strip_prefix('|') {
        Some(rest) => (true, rest),
        None => (false, fragment),
    };
    let (anchor_end, body) = match body.strip_suffix('|') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let mut out = String::with_capacity(body.len() * 2 + 2);
    if anchor_start {
        out.push('^');
    }
    let mut buf = [0_u8; 4];
    for ch in body.chars() {
        match ch {
            '*' => out.push_str(WILDCARD),
            '^' => out.push_str(SEPARATOR),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    if anchor_end {
        out.push('$');
    }
    out
}
