//! src/widgets/accordion.rs
use super::Error;
use crate::view::LandingView;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// FAQ block where at most one answer is expanded.
#[derive(Debug, Clone)]
pub struct Accordion {
    entries: Vec<FaqEntry>,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            open: None,
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses `index` if it is expanded, otherwise collapses whatever
    /// was expanded and expands `index`.
    pub fn toggle(&mut self, index: usize, view: &mut impl LandingView) -> Result<(), Error> {
        if index >= self.entries.len() {
            return Err(Error::UnknownPanel(index));
        }

        match self.open {
            Some(current) if current == index => {
                view.set_faq_panel(index, false);
                self.open = None;
            }
            Some(current) => {
                view.set_faq_panel(current, false);
                view.set_faq_panel(index, true);
                self.open = Some(index);
            }
            None => {
                view.set_faq_panel(index, true);
                self.open = Some(index);
            }
        }

        Ok(())
    }
}
