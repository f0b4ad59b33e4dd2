//! src/widgets/toast.rs
use serde::{Deserialize, Serialize};

/// Options handed to the toast notification library on page load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastOptions {
    #[serde(rename(serialize = "closeButton"))]
    pub close_button: bool,
    #[serde(rename(serialize = "progressBar"))]
    pub progress_bar: bool,
    #[serde(rename(serialize = "positionClass"))]
    pub position_class: String,
    #[serde(rename(serialize = "preventDuplicates"))]
    pub prevent_duplicates: bool,
    #[serde(rename(serialize = "newestOnTop"))]
    pub newest_on_top: bool,
    #[serde(rename(serialize = "showDuration"))]
    pub show_duration: u32,
    #[serde(rename(serialize = "hideDuration"))]
    pub hide_duration: u32,
    #[serde(rename(serialize = "timeOut"))]
    pub time_out: u32,
    #[serde(rename(serialize = "extendedTimeOut"))]
    pub extended_time_out: u32,
    #[serde(rename(serialize = "showEasing"))]
    pub show_easing: String,
    #[serde(rename(serialize = "hideEasing"))]
    pub hide_easing: String,
    #[serde(rename(serialize = "showMethod"))]
    pub show_method: String,
    #[serde(rename(serialize = "hideMethod"))]
    pub hide_method: String,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            close_button: false,
            progress_bar: false,
            position_class: "toast-top-right".into(),
            prevent_duplicates: false,
            newest_on_top: true,
            show_duration: 300,
            hide_duration: 1000,
            time_out: 5000,
            extended_time_out: 1000,
            show_easing: "swing".into(),
            hide_easing: "linear".into(),
            show_method: "fadeIn".into(),
            hide_method: "fadeOut".into(),
        }
    }
}

impl ToastOptions {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
