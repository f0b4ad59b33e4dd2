//! src/client.rs
use crate::domain::LandingEmail;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SUCCESS_STATUS: &str = "success";

#[derive(thiserror::Error)]
pub enum Error {
    #[error("Failed to reach the send_email endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("The send_email endpoint returned an unreadable body")]
    Body(#[source] reqwest::Error),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SendEmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendEmailResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SendEmailResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Client for the backend that receives captured emails.
#[derive(Debug, Clone)]
pub struct SendEmailClient {
    http_client: Client,
    url: String,
}

impl SendEmailClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            url: format!("{}/send_email", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One attempt, no retry. Any HTTP status is accepted as long as the
    /// body decodes, the caller branches on `status`.
    pub async fn send_email(&self, email: &LandingEmail) -> Result<SendEmailResponse, Error> {
        let request = SendEmailRequest {
            email: email.as_ref(),
        };

        let response = self
            .http_client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(Error::Transport)?;

        response
            .json::<SendEmailResponse>()
            .await
            .map_err(Error::Body)
    }
}
