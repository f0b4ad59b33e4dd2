//! tests/api/page_widgets.rs

use crate::helpers::offline_page;
use landing::view::testing::ViewCall;
use landing::page::PageEvent;
use landing::widgets::Error;

#[tokio::test]
async fn email_button_reveals_the_input() {
    // Arrange
    let mut page = offline_page();

    // Act
    page.dispatch(PageEvent::EmailButtonClicked).await.unwrap();

    // Assert
    assert_eq!(page.view().calls, vec![ViewCall::RevealEmailInput]);
}

#[tokio::test]
async fn faq_keeps_a_single_panel_open() {
    // Arrange
    let mut page = offline_page();

    // Act
    page.dispatch(PageEvent::FaqClicked(0)).await.unwrap();
    page.dispatch(PageEvent::FaqClicked(1)).await.unwrap();

    // Assert
    assert_eq!(page.faq().open_panel(), Some(1));
    assert_eq!(
        page.view().calls,
        vec![
            ViewCall::FaqPanel(0, true),
            ViewCall::FaqPanel(0, false),
            ViewCall::FaqPanel(1, true),
        ]
    );
}

#[tokio::test]
async fn faq_entries_come_from_configuration() {
    let page = offline_page();

    assert_eq!(page.faq().entries().len(), 3);
    assert!(page.faq().entries().iter().all(|e| !e.question.is_empty()));
}

#[tokio::test]
async fn clicking_a_missing_faq_panel_is_an_error() {
    // Arrange
    let mut page = offline_page();

    // Act
    let result = page.dispatch(PageEvent::FaqClicked(42)).await;

    // Assert
    assert_eq!(result, Err(Error::UnknownPanel(42)));
    assert!(page.view().calls.is_empty());
}

#[tokio::test]
async fn side_menu_toggles_and_highlights_one_item() {
    // Arrange
    let mut page = offline_page();

    // Act
    page.dispatch(PageEvent::MenuToggled).await.unwrap();
    page.dispatch(PageEvent::MenuItemClicked(2)).await.unwrap();
    page.dispatch(PageEvent::MenuItemClicked(0)).await.unwrap();
    page.dispatch(PageEvent::MenuToggled).await.unwrap();

    // Assert
    assert!(!page.menu().is_open());
    assert_eq!(page.menu().active_item(), Some(0));
    assert_eq!(
        page.view().calls,
        vec![
            ViewCall::MenuOpen(true),
            ViewCall::ActiveMenuItem(2),
            ViewCall::ActiveMenuItem(0),
            ViewCall::MenuOpen(false),
        ]
    );
}

#[tokio::test]
async fn toast_options_are_exposed_as_library_json() {
    let page = offline_page();

    let json = page.toast_options().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["closeButton"], true);
    assert_eq!(value["progressBar"], true);
    assert_eq!(value["positionClass"], "toast-top-right");
}
