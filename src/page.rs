//! src/page.rs
use crate::client::SendEmailClient;
use crate::configuration::Settings;
use crate::view::LandingView;
use crate::widgets::{
    Accordion, CaptureState, EmailCapture, Error, SideMenu, SubmitOutcome, ToastOptions,
};
use std::time::Duration;

/// User interactions the landing page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    EmailButtonClicked,
    EmailChanged(String),
    EmailBlurred,
    ConsentChanged(bool),
    SubmitClicked,
    ResendClicked,
    FaqClicked(usize),
    MenuToggled,
    MenuItemClicked(usize),
}

pub struct LandingPage<V> {
    view: V,
    client: SendEmailClient,
    capture: EmailCapture,
    faq: Accordion,
    menu: SideMenu,
    toast: ToastOptions,
    resend_delay: Duration,
}

impl<V: LandingView> LandingPage<V> {
    pub fn build(settings: Settings, view: V) -> Self {
        Self {
            view,
            client: SendEmailClient::new(&settings.backend.base_url),
            capture: EmailCapture::new(settings.validation.allowed_domains),
            faq: Accordion::new(settings.faq),
            menu: SideMenu::new(settings.menu),
            toast: settings.toast,
            resend_delay: settings.resend.delay(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }

    pub fn menu(&self) -> &SideMenu {
        &self.menu
    }

    pub fn toast_options(&self) -> &ToastOptions {
        &self.toast
    }

    #[tracing::instrument(name = "Handling a page event", skip(self))]
    pub async fn dispatch(&mut self, event: PageEvent) -> Result<(), Error> {
        match event {
            PageEvent::EmailButtonClicked => self.capture.reveal(&mut self.view),
            PageEvent::EmailChanged(value) => self.capture.set_value(value),
            PageEvent::EmailBlurred => {
                self.capture.validate(&mut self.view);
            }
            PageEvent::ConsentChanged(consent) => self.capture.set_consent(consent),
            PageEvent::SubmitClicked => {
                self.submit().await;
            }
            PageEvent::ResendClicked => self.view.show_message_container(),
            PageEvent::FaqClicked(index) => self.faq.toggle(index, &mut self.view)?,
            PageEvent::MenuToggled => self.menu.toggle(&mut self.view),
            PageEvent::MenuItemClicked(index) => self.menu.select(index, &mut self.view)?,
        }
        Ok(())
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.capture.submit(&mut self.view, &self.client).await
    }

    /// How long after page load the resend link stays hidden.
    ///
    /// The page does not own the timer, so events keep flowing while it
    /// runs; callers sleep on their side and then call `show_resend_link`.
    pub fn resend_delay(&self) -> Duration {
        self.resend_delay
    }

    pub fn show_resend_link(&mut self) {
        self.view.show_resend_link();
    }
}
