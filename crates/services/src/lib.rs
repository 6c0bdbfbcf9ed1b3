#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod progress_gate;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{AppServicesError, AuthServiceError, ProgressGateError};
pub use progress_gate::{ProgressGate, TopicOverview};
