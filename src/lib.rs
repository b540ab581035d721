pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod users;
