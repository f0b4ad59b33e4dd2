pub mod client;
pub mod configuration;
pub mod domain;
pub mod page;
pub mod telemetry;
pub mod view;
pub mod widgets;
