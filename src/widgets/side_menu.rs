//! src/widgets/side_menu.rs
use super::Error;
use crate::view::LandingView;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct SideMenu {
    items: Vec<MenuItem>,
    open: bool,
    active: Option<usize>,
}

impl SideMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            open: false,
            active: None,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_item(&self) -> Option<usize> {
        self.active
    }

    pub fn toggle(&mut self, view: &mut impl LandingView) {
        self.open = !self.open;
        view.set_menu_open(self.open);
    }

    pub fn select(&mut self, index: usize, view: &mut impl LandingView) -> Result<(), Error> {
        if index >= self.items.len() {
            return Err(Error::UnknownMenuItem(index));
        }

        self.active = Some(index);
        view.set_active_menu_item(index);
        Ok(())
    }
}
