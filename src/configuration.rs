//! src/configuration.rs
use crate::domain::AllowedDomains;
use crate::widgets::{FaqEntry, MenuItem, ToastOptions};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
    pub resend: ResendSettings,
    #[serde(default)]
    pub toast: ToastOptions,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl Settings {
    pub fn set_backend_url(&mut self, base_url: String) {
        self.backend.base_url = base_url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ValidationSettings {
    #[serde(default)]
    pub allowed_domains: AllowedDomains,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ResendSettings {
    pub delay_milliseconds: u64,
}

impl ResendSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_milliseconds)
    }
}

/// Values picked up from `BACKEND_*` environment variables.
#[derive(Deserialize, Debug, Default)]
struct BackendOverrides {
    base_url: Option<String>,
}

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if environment == Environment::Local {
        // A missing .env file is fine, the yaml values stay in place.
        let _ = dotenvy::dotenv();
    }

    let overrides = envy::prefixed("BACKEND_")
        .from_env::<BackendOverrides>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse backend settings from environment: {}", e)))?;
    if let Some(base_url) = overrides.base_url {
        settings.set_backend_url(base_url);
    }

    Ok(settings)
}
