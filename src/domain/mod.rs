//! src/domain/mod.rs
mod allowed_domains;
pub use allowed_domains::AllowedDomains;

pub mod email;
pub use email::LandingEmail;
