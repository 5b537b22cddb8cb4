//! # Fuel Station API
//!
//! HTTP surface over the SMS dispatcher: single sends, transaction and
//! payment notifications, and bulk campaigns.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
