use folio_domain::config::{ImagesConfig, RemotePattern};
use folio_domain::constants::PLACEHOLDER_IMAGE;
use url::Url;

/// Host part of a [`RemotePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum HostMatch {
    /// `cdn.example.com`
    Exact(String),
    /// `*.example.com`: exactly one extra label.
    OneLabel(String),
    /// `**.example.com`: one or more extra labels.
    AnyDepth(String),
}

impl HostMatch {
    fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim().to_ascii_lowercase();
        if let Some(suffix) = pattern.strip_prefix("**.") {
            Self::AnyDepth(suffix.to_owned())
        } else if let Some(suffix) = pattern.strip_prefix("*.") {
            Self::OneLabel(suffix.to_owned())
        } else {
            Self::Exact(pattern)
        }
    }

    fn matches(&self, host: &str) -> bool {
        match self {
            Self::Exact(expected) => host == expected,
            Self::OneLabel(suffix) => {
                subdomain_of(host, suffix).is_some_and(|label| !label.contains('.'))
            }
            Self::AnyDepth(suffix) => subdomain_of(host, suffix).is_some(),
        }
    }
}

/// The labels in front of `.suffix`, if `host` is a strict subdomain of it.
fn subdomain_of<'a>(host: &'a str, suffix: &str) -> Option<&'a str> {
    let head = host.strip_suffix(suffix)?.strip_suffix('.')?;
    (!head.is_empty()).then_some(head)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    scheme: String,
    host: HostMatch,
}

/// Decides which image references the page may render.
///
/// Site-relative paths (`/shot.png`) are always served from our own static
/// directory. Absolute URLs must match an allow-listed protocol and host;
/// anything else is swapped for the placeholder image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePolicy {
    rules: Vec<Rule>,
}

impl ImagePolicy {
    #[must_use]
    pub fn new(patterns: &[RemotePattern]) -> Self {
        let rules = patterns
            .iter()
            .map(|p| Rule {
                scheme: p.protocol.trim().trim_end_matches(':').to_ascii_lowercase(),
                host: HostMatch::parse(&p.hostname),
            })
            .collect();
        Self { rules }
    }

    #[must_use]
    pub fn from_config(config: &ImagesConfig) -> Self {
        Self::new(&config.remote_patterns)
    }

    /// Whether `src` is an absolute URL on an allow-listed origin.
    #[must_use]
    pub fn allows_remote(&self, src: &str) -> bool {
        let Ok(url) = Url::parse(src) else {
            return false;
        };
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        self.rules.iter().any(|rule| rule.scheme == url.scheme() && rule.host.matches(&host))
    }

    /// The reference to actually put in `src`.
    #[must_use]
    pub fn resolve<'a>(&self, src: &'a str) -> &'a str {
        let src = src.trim();
        if is_site_relative(src) || self.allows_remote(src) {
            src
        } else {
            if !src.is_empty() {
                tracing::debug!(src, "Image source is not allow-listed, using placeholder");
            }
            PLACEHOLDER_IMAGE
        }
    }
}

/// `/path` but not the protocol-relative `//host/path`.
fn is_site_relative(src: &str) -> bool {
    src.starts_with('/') && !src.starts_with("//")
}
