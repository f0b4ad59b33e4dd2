//! src/widgets/mod.rs
mod accordion;
pub use accordion::*;

mod email_capture;
pub use email_capture::*;

mod side_menu;
pub use side_menu::*;

mod toast;
pub use toast::*;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("There is no FAQ panel number {0}")]
    UnknownPanel(usize),
    #[error("There is no menu item number {0}")]
    UnknownMenuItem(usize),
}
