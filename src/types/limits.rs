/// Input bounds applied while compiling directives.
///
/// Both bounds are off by default. A host service that compiles untrusted
/// directive text can cap them to keep pattern matching cost predictable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Limits {
    /// Maximum byte length of a pattern fragment.
    pub max_pattern_len: Option<usize>,
    /// Maximum number of comma separated options on one line.
    pub max_options: Option<usize>,
}

impl Limits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_pattern_len(mut self, len: usize) -> Self {
        self.max_pattern_len = Some(len);
        self
    }

    #[must_use]
    pub fn max_options(mut self, count: usize) -> Self {
        self.max_options = Some(count);
        self
    }
}
