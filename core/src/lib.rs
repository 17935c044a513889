//! Core library for SvrDash
//!
//! This crate defines the shared types and error taxonomy used across
//! all SvrDash components: the server record model, the uniform response
//! envelope, and the status enum driving the local filter.

pub mod error;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::{EnvelopeData, EnvelopeResponse, ServerRecord, Status};
