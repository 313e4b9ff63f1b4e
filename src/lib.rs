pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod inquiries;
pub mod products;
pub mod response;
pub mod state;
pub mod validate;
