//! Server gateway for SvrDash
//!
//! Client-side facade issuing remote operations against the server
//! resource collection (list, get, save, ping, delete) plus a pure local
//! filter over an already-fetched result set. Every transport failure is
//! normalized into a single error shape carrying the numeric status code.

pub mod client;
pub mod config;

// Re-exports
pub use client::{filter_servers, ServerGateway};
pub use config::{GatewayConfig, DEFAULT_BASE_URL};
