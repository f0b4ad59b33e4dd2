//! src/view.rs

/// Everything the landing page can change on screen.
///
/// The page controller never touches markup itself; a browser binding, a
/// terminal front end or a test double implements this trait.
pub trait LandingView {
    /// Hide the "leave your email" button and show the input with its submit button.
    fn reveal_email_input(&mut self);
    fn show_field_error(&mut self, message: &str);
    fn clear_field_error(&mut self);
    /// Blocking, modal message.
    fn show_alert(&mut self, message: &str);
    fn hide_form(&mut self);
    fn show_confirmation(&mut self, email: &str);
    fn show_resend_link(&mut self);
    fn show_message_container(&mut self);
    fn set_faq_panel(&mut self, index: usize, open: bool);
    /// Applies to the drawer and every divider line.
    fn set_menu_open(&mut self, open: bool);
    fn set_active_menu_item(&mut self, index: usize);
}

/// Headless view that reports every change as a `tracing` event.
#[derive(Debug, Default)]
pub struct LogView;

impl LandingView for LogView {
    fn reveal_email_input(&mut self) {
        tracing::info!("Email input revealed");
    }

    fn show_field_error(&mut self, message: &str) {
        tracing::info!(error_message = %message, "Email field marked invalid");
    }

    fn clear_field_error(&mut self) {
        tracing::info!("Email field error cleared");
    }

    fn show_alert(&mut self, message: &str) {
        tracing::warn!(alert = %message, "Alert shown");
    }

    fn hide_form(&mut self) {
        tracing::info!("Email form hidden");
    }

    fn show_confirmation(&mut self, email: &str) {
        tracing::info!(subscriber_email = %email, "Confirmation shown");
    }

    fn show_resend_link(&mut self) {
        tracing::info!("Resend link shown");
    }

    fn show_message_container(&mut self) {
        tracing::info!("Message container shown");
    }

    fn set_faq_panel(&mut self, index: usize, open: bool) {
        tracing::info!(panel = index, open, "FAQ panel toggled");
    }

    fn set_menu_open(&mut self, open: bool) {
        tracing::info!(open, "Side menu toggled");
    }

    fn set_active_menu_item(&mut self, index: usize) {
        tracing::info!(item = index, "Menu item activated");
    }
}

/// View double that records every change, shared by unit and integration tests.
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use super::LandingView;

    #[derive(Debug, Clone, PartialEq)]
    pub enum ViewCall {
        RevealEmailInput,
        FieldError(String),
        ClearFieldError,
        Alert(String),
        HideForm,
        Confirmation(String),
        ResendLink,
        MessageContainer,
        FaqPanel(usize, bool),
        MenuOpen(bool),
        ActiveMenuItem(usize),
    }

    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub calls: Vec<ViewCall>,
    }

    impl RecordingView {
        pub fn alerts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    ViewCall::Alert(message) => Some(message.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn form_hidden(&self) -> bool {
            self.calls.contains(&ViewCall::HideForm)
        }

        pub fn count(&self, call: &ViewCall) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }
    }

    impl LandingView for RecordingView {
        fn reveal_email_input(&mut self) {
            self.calls.push(ViewCall::RevealEmailInput);
        }

        fn show_field_error(&mut self, message: &str) {
            self.calls.push(ViewCall::FieldError(message.to_string()));
        }

        fn clear_field_error(&mut self) {
            self.calls.push(ViewCall::ClearFieldError);
        }

        fn show_alert(&mut self, message: &str) {
            self.calls.push(ViewCall::Alert(message.to_string()));
        }

        fn hide_form(&mut self) {
            self.calls.push(ViewCall::HideForm);
        }

        fn show_confirmation(&mut self, email: &str) {
            self.calls.push(ViewCall::Confirmation(email.to_string()));
        }

        fn show_resend_link(&mut self) {
            self.calls.push(ViewCall::ResendLink);
        }

        fn show_message_container(&mut self) {
            self.calls.push(ViewCall::MessageContainer);
        }

        fn set_faq_panel(&mut self, index: usize, open: bool) {
            self.calls.push(ViewCall::FaqPanel(index, open));
        }

        fn set_menu_open(&mut self, open: bool) {
            self.calls.push(ViewCall::MenuOpen(open));
        }

        fn set_active_menu_item(&mut self, index: usize) {
            self.calls.push(ViewCall::ActiveMenuItem(index));
        }
    }
}
