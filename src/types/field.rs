use std::fmt;

/// Which part of a [`Document`](super::Document) a rule's pattern is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldTarget {
    Url,
    Title,
    Description,
    Content,
}

impl FieldTarget {
    /// Scan order used to pick the single field a rule is tested against.
    pub const PRIORITY: [FieldTarget; 4] = [
        FieldTarget::Url,
        FieldTarget::Title,
        FieldTarget::Description,
        FieldTarget::Content,
    ];

    /// The option key that selects this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldTarget::Url => "inurl",
            FieldTarget::Title => "intitle",
            FieldTarget::Description => "indescription",
            FieldTarget::Content => "incontent",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|t| t.key() == key)
    }

    fn bit(self) -> u8 {
        match self {
            FieldTarget::Url => 1,
            FieldTarget::Title => 1 << 1,
            FieldTarget::Description => 1 << 2,
            FieldTarget::Content => 1 << 3,
        }
    }
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The set of field flags carried by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldFlags(u8);

impl FieldFlags {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn with(mut self, target: FieldTarget) -> Self {
        self.insert(target);
        self
    }

    pub fn insert(&mut self, target: FieldTarget) {
        self.0 |= target.bit();
    }

    #[must_use]
    pub fn contains(self, target: FieldTarget) -> bool {
        self.0 & target.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The first set flag in [`FieldTarget::PRIORITY`] order. Any further
    /// flags are ignored during evaluation.
    #[must_use]
    pub fn primary(self) -> Option<FieldTarget> {
        self.iter().next()
    }

    /// Set flags in priority order.
    pub fn iter(self) -> impl Iterator<Item = FieldTarget> {
        FieldTarget::PRIORITY
            .into_iter()
            .filter(move |t| self.contains(*t))
    }
}

impl From<FieldTarget> for FieldFlags {
    fn from(target: FieldTarget) -> Self {
        Self::empty().with(target)
    }
}

impl fmt::Display for FieldFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, target) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{target}")?;
        }
        Ok(())
    }
}
