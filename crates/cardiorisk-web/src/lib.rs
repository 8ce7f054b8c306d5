//! cardiorisk-web — HTTP host for the risk predictor.
//! Provides:
//!   - JSON prediction endpoint for the intake form
//!   - Model layout introspection
//!   - Liveness probe

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
