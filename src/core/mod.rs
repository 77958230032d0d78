pub mod aggregate;
pub mod billing;
pub mod config;
pub mod formatter;
pub mod models;
pub mod notify;
pub mod window;
