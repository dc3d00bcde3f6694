pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod host;
pub mod input;
pub mod logging;
pub mod page;
pub mod transition;
pub mod ui;
