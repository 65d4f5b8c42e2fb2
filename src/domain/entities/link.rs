//! Link entity representing a shortened URL mapping.

/// A short code paired with the original URL it redirects to.
///
/// Links are immutable once stored: a code is never reassigned and a URL
/// always resolves to the code it was first given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }

    /// Path form of the short link, e.g. `/aZ3k9Q`.
    pub fn short_path(&self) -> String {
        format!("/{}", self.code)
    }
}

/// Input data for creating a new link.
///
/// `long_url` is the exact string submitted by the client. It is never
/// normalized, so `http://x.com` and `http://x.com/` are distinct links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(new_link.code, new_link.long_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("abc123", "https://example.com");

        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
    }

    #[test]
    fn test_short_path() {
        let link = Link::new("Xy9z01", "https://example.com/a");
        assert_eq!(link.short_path(), "/Xy9z01");
    }

    #[test]
    fn test_new_link_into_link() {
        let new_link = NewLink {
            code: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        let link: Link = new_link.into();
        assert_eq!(link.code, "xyz789");
        assert_eq!(link.long_url, "https://rust-lang.org");
    }
}
