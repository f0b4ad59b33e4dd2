use landing::configuration::get_configuration;
use landing::page::{LandingPage, PageEvent};
use landing::telemetry::{get_subscriber, init_subscriber};
use landing::view::LogView;

/// Walks a visitor through the page against the configured backend.
///
/// $ cargo run --example landing_session | bunyan
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("landing".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let mut page = LandingPage::build(config, LogView);

    tracing::info!(
        toast_options = %page.toast_options().to_json()?,
        "Page loaded"
    );

    // The resend timer starts on page load and runs alongside the visit.
    let resend_timer = tokio::time::sleep(page.resend_delay());
    tokio::pin!(resend_timer);

    let events = vec![
        PageEvent::MenuToggled,
        PageEvent::MenuItemClicked(2),
        PageEvent::FaqClicked(0),
        PageEvent::FaqClicked(1),
        PageEvent::EmailButtonClicked,
        PageEvent::EmailChanged("visitor@notallowed.com".into()),
        PageEvent::EmailBlurred,
        PageEvent::EmailChanged("visitor@gmail.com".into()),
        PageEvent::EmailBlurred,
        PageEvent::SubmitClicked,
        PageEvent::ConsentChanged(true),
        PageEvent::SubmitClicked,
    ];
    for event in events {
        page.dispatch(event).await?;
    }

    resend_timer.as_mut().await;
    page.show_resend_link();
    page.dispatch(PageEvent::ResendClicked).await?;

    Ok(())
}
