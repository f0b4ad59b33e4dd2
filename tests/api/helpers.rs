//! tests/api/helpers.rs

use landing::configuration::{get_configuration, Settings};
use landing::page::{LandingPage, PageEvent};
use landing::telemetry::{get_subscriber, init_subscriber};
use landing::view::testing::RecordingView;
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub page: LandingPage<RecordingView>,
    pub backend: MockServer,
}

impl Test {
    pub fn view(&self) -> &RecordingView {
        self.page.view()
    }

    pub async fn dispatch(&mut self, event: PageEvent) {
        self.page
            .dispatch(event)
            .await
            .expect("Failed to dispatch page event.");
    }

    /// Clicks through the capture widget the way a visitor would.
    pub async fn submit_email(&mut self, email: &str, consent: bool) {
        self.dispatch(PageEvent::EmailButtonClicked).await;
        self.dispatch(PageEvent::EmailChanged(email.to_string())).await;
        self.dispatch(PageEvent::EmailBlurred).await;
        self.dispatch(PageEvent::ConsentChanged(consent)).await;
        self.dispatch(PageEvent::SubmitClicked).await;
    }

    pub async fn received_email(&self) -> SendEmailBody {
        let requests = self.backend.received_requests().await.unwrap();
        let request = if requests.len() == 1 {
            &requests[0]
        } else {
            panic!(
                "Expected 1 request to /send_email but instead {} were sent.",
                requests.len()
            );
        };

        serde_json::from_slice(&request.body).expect("Failed to parse request body")
    }
}

pub fn configuration() -> Settings {
    Lazy::force(&TRACING);
    get_configuration().expect("Failed to read configuration.")
}

pub async fn setup() -> Test {
    let mut config = configuration();

    let backend = MockServer::start().await;
    config.set_backend_url(backend.uri());

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    let page = LandingPage::build(config, RecordingView::default());

    Test { page, backend }
}

/// A page whose backend is unreachable, for tests that never submit.
pub fn offline_page() -> LandingPage<RecordingView> {
    let mut config = configuration();
    config.set_backend_url("http://127.0.0.1:1".into());
    LandingPage::build(config, RecordingView::default())
}

#[derive(serde::Deserialize)]
pub struct SendEmailBody {
    pub email: String,
}
