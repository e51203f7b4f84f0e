use url::Url;

use super::error::MalformedCandidateError;
use super::field::FieldTarget;

/// A candidate search result: its URL plus whatever text the caller extracted.
///
/// The host is resolved once on construction and kept as written in the URL,
/// without case folding or IDNA conversion. Patterns targeting the URL are
/// tested against the URL string exactly as given, not a normalised form.
///
/// ```
/// use goggles::Document;
///
/// let doc = Document::new("https://example.com/posts/1")
///     .unwrap()
///     .with_title("Hello");
/// assert_eq!(doc.host(), "example.com");
/// assert_eq!(doc.title(), Some("Hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    url: String,
    host: String,
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

impl Document {
    /// Build a document from an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCandidateError`] if the URL does not parse or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, MalformedCandidateError> {
        let url = url.into();
        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(source) => return Err(MalformedCandidateError::InvalidUrl { url, source }),
        };
        let Some(normalized) = parsed.host_str() else {
            return Err(MalformedCandidateError::MissingHost { url });
        };
        let host = raw_host(&url).unwrap_or(normalized).to_owned();
        Ok(Self {
            url,
            host,
            title: None,
            description: None,
            content: None,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The text a rule targeting `target` is tested against.
    #[must_use]
    pub fn field(&self, target: FieldTarget) -> Option<&str> {
        match target {
            FieldTarget::Url => Some(&self.url),
            FieldTarget::Title => self.title(),
            FieldTarget::Description => self.description(),
            FieldTarget::Content => self.content(),
        }
    }
}

/// The host substring of an absolute URL, before any normalisation.
///
/// Only called once `url` has parsed with a host, so the authority is known to
/// exist. Userinfo, port and brackets around IPv6 literals are handled the way
/// the URL parser handles them.
fn raw_host(url: &str) -> Option<&str> {
    let url = url.trim_matches(|c: char| c <= ' ');
    let (_, rest) = url.split_once(':')?;
    let rest = rest.trim_start_matches(['/', '\\']);
    let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = if host_port.starts_with('[') {
        host_port.find(']').map_or(host_port, |i| &host_port[..=i])
    } else {
        host_port.split_once(':').map_or(host_port, |(host, _)| host)
    };
    (!host.is_empty()).then_some(host)
}
