//! src/domain/allowed_domains.rs
use serde::Deserialize;

const DEFAULT_DOMAINS: [&str; 5] = ["gmail.com", "yahoo.com", "example.com", "mail.ru", "icloud.com"];

/// Email domains the capture form accepts.
///
/// Entries are stored lowercased, lookups ignore case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct AllowedDomains(Vec<String>);

impl AllowedDomains {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.0.iter().any(|allowed| *allowed == domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for AllowedDomains {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAINS)
    }
}

impl From<Vec<String>> for AllowedDomains {
    fn from(domains: Vec<String>) -> Self {
        Self::new(domains)
    }
}
