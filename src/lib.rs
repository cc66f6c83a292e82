// Public API for integration tests and potential library usage

pub mod api;
pub mod app;
pub mod config;
pub mod render;
pub mod router;
pub mod session;
pub mod terminal;
pub mod types;
pub mod views;
