//! cardiorisk-common — Shared error types used across all CardioRisk crates.

pub mod error;

// Re-export commonly used types
pub use error::{ApiError, ArtifactLoadError, InvalidInputError};
