pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod output;
pub mod pool;
pub mod select;
pub mod widgets;
