//! tests/api/resend.rs

use crate::helpers::offline_page;
use landing::page::PageEvent;
use landing::view::testing::ViewCall;
use std::time::Duration;
use tokio::time::{sleep, timeout, Instant};

#[tokio::test]
async fn resend_link_waits_five_seconds_by_default() {
    let page = offline_page();

    assert_eq!(page.resend_delay(), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn page_handles_events_while_the_resend_timer_runs() {
    // Arrange
    let mut page = offline_page();
    let started = Instant::now();
    let resend_timer = sleep(page.resend_delay());
    tokio::pin!(resend_timer);

    // Act
    page.dispatch(PageEvent::EmailButtonClicked).await.unwrap();
    page.dispatch(PageEvent::FaqClicked(0)).await.unwrap();
    page.dispatch(PageEvent::MenuToggled).await.unwrap();
    assert!(timeout(Duration::from_millis(1), resend_timer.as_mut())
        .await
        .is_err());

    resend_timer.as_mut().await;
    page.show_resend_link();

    // Assert
    assert!(started.elapsed() >= Duration::from_secs(5));
    assert_eq!(
        page.view().calls,
        vec![
            ViewCall::RevealEmailInput,
            ViewCall::FaqPanel(0, true),
            ViewCall::MenuOpen(true),
            ViewCall::ResendLink,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn resend_link_stays_hidden_before_the_delay() {
    // Arrange
    let page = offline_page();

    // Act
    let result = timeout(Duration::from_millis(4_999), sleep(page.resend_delay())).await;

    // Assert
    assert!(result.is_err());
    assert!(page.view().calls.is_empty());
}

#[tokio::test]
async fn resend_click_shows_the_message_container() {
    // Arrange
    let mut page = offline_page();

    // Act
    page.dispatch(PageEvent::ResendClicked).await.unwrap();

    // Assert
    assert_eq!(page.view().calls, vec![ViewCall::MessageContainer]);
}
