//! src/widgets/email_capture.rs
use crate::client::SendEmailClient;
use crate::domain::email::Error;
use crate::domain::{AllowedDomains, LandingEmail};
use crate::view::LandingView;
use uuid::Uuid;

pub const CONSENT_REQUIRED: &str =
    "Пожалуйста, подтвердите согласие на обработку персональных данных";
pub const SUBMISSION_FAILED: &str = "Не удалось отправить email. Попробуйте ещё раз.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Only the call-to-action button is visible.
    Collapsed,
    Editing,
    /// The backend accepted the email, the form is gone.
    Confirmed,
}

/// Which branch a submit attempt ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form is not on screen, nothing was checked or sent.
    NotEditing,
    Invalid,
    ConsentMissing,
    Confirmed(LandingEmail),
    Rejected(String),
    Failed,
}

#[derive(Debug, Clone)]
pub struct EmailCapture {
    state: CaptureState,
    value: String,
    consent: bool,
    allowed_domains: AllowedDomains,
}

impl EmailCapture {
    pub fn new(allowed_domains: AllowedDomains) -> Self {
        Self {
            state: CaptureState::Collapsed,
            value: String::new(),
            consent: false,
            allowed_domains,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn reveal(&mut self, view: &mut impl LandingView) {
        if self.state == CaptureState::Collapsed {
            view.reveal_email_input();
            self.state = CaptureState::Editing;
        }
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    /// Runs on blur and before every submit. An empty field is not valid
    /// but carries no error message either.
    pub fn validate(&mut self, view: &mut impl LandingView) -> Option<LandingEmail> {
        match LandingEmail::parse(&self.value, &self.allowed_domains) {
            Ok(email) => {
                view.clear_field_error();
                Some(email)
            }
            Err(Error::Empty) => {
                view.clear_field_error();
                None
            }
            Err(e) => {
                view.show_field_error(&e.to_string());
                None
            }
        }
    }

    #[tracing::instrument(
        name = "Submitting a captured email",
        skip(self, view, client),
        fields(
            request_id = %Uuid::new_v4(),
            subscriber_email = %self.value
        )
    )]
    pub async fn submit(
        &mut self,
        view: &mut impl LandingView,
        client: &SendEmailClient,
    ) -> SubmitOutcome {
        if self.state != CaptureState::Editing {
            tracing::warn!(state = ?self.state, "Submit ignored while the form is not shown");
            return SubmitOutcome::NotEditing;
        }

        let email = match self.validate(view) {
            Some(email) => email,
            None => return SubmitOutcome::Invalid,
        };

        if !self.consent {
            view.show_alert(CONSENT_REQUIRED);
            return SubmitOutcome::ConsentMissing;
        }

        match client.send_email(&email).await {
            Ok(response) if response.is_success() => {
                tracing::info!("Email accepted by the backend");
                view.hide_form();
                view.show_confirmation(email.as_ref());
                self.state = CaptureState::Confirmed;
                self.value.clear();
                SubmitOutcome::Confirmed(email)
            }
            Ok(response) => {
                tracing::warn!(status = %response.status, "Email rejected by the backend");
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SUBMISSION_FAILED.to_string());
                view.show_alert(&message);
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to send the captured email");
                view.show_alert(SUBMISSION_FAILED);
                SubmitOutcome::Failed
            }
        }
    }
}
