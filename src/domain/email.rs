//! src/domain/email.rs
use super::AllowedDomains;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// `local@domain.tld`; U+FEFF joins `\s` to match browser whitespace.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("Failed to init regexp")
});

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Empty email")]
    Empty,
    #[error("Неверный формат email")]
    InvalidFormat,
    #[error("Недопустимый домен")]
    DomainNotAllowed(String),
}

/// An email typed into the capture form that passed shape and domain checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingEmail(String);

impl LandingEmail {
    pub fn parse(s: &str, allowed: &AllowedDomains) -> Result<Self, Error> {
        // U+FEFF counts as whitespace for browser input fields.
        let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if s.is_empty() {
            return Err(Error::Empty);
        }

        if !EMAIL_REGEX.is_match(s) {
            return Err(Error::InvalidFormat);
        }
        let domain = domain_of(s);

        if !allowed.contains(domain) {
            return Err(Error::DomainNotAllowed(domain.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    pub fn domain(&self) -> &str {
        domain_of(&self.0)
    }
}

/// Text after the `@`; a matched address holds exactly one.
fn domain_of(s: &str) -> &str {
    s.split_once('@').map(|(_, d)| d).unwrap_or_default()
}

impl AsRef<str> for LandingEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LandingEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
