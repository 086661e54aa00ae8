//! HTTP inbound adapter exposing the question REST endpoints.

pub mod app;
pub mod error;
pub mod health;
pub mod questions;
pub mod schemas;
pub mod state;

pub use app::{AppDependencies, build_app};
pub use error::{ApiResult, MessageEnvelope, json_error_handler};
