//! Training Center Connect - HTTP access to the training center management API.
//!
//! This crate provides the network implementation of the collaborator traits
//! defined in `traincenter-core`.

pub mod client;
pub mod config;

// Re-export commonly used types
pub use client::TrainingCenterApiClient;
pub use config::{ApiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
