//! HTTP handlers for all web routes.

pub mod predict;
pub mod model;
pub mod health;
