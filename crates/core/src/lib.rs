//! Training Center Core - marketing target domain, analytics, and traits.
//!
//! This crate contains the target and achievement logic for the training
//! center client. It is transport-agnostic and defines the collaborator
//! traits implemented by the `connect` crate.

pub mod constants;
pub mod errors;
pub mod marketing;

// Re-export the marketing domain
pub use marketing::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
