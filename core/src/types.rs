//! Shared types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Liveness state of a server, also used as the query dimension when
/// filtering an already-fetched result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    All,
    ServerUp,
    ServerDown,
}

impl Status {
    /// Raw wire token (`ALL`, `SERVER_UP`, `SERVER_DOWN`)
    pub fn token(&self) -> &'static str {
        match self {
            Status::All => "ALL",
            Status::ServerUp => "SERVER_UP",
            Status::ServerDown => "SERVER_DOWN",
        }
    }

    /// Human-readable label (`SERVER UP` rather than `SERVER_UP`)
    pub fn label(&self) -> &'static str {
        match self {
            Status::All => "ALL",
            Status::ServerUp => "SERVER UP",
            Status::ServerDown => "SERVER DOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Status::All),
            "SERVER_UP" => Ok(Status::ServerUp),
            "SERVER_DOWN" => Ok(Status::ServerDown),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

/// Server model - a record owned by the remote collection; treated as an
/// immutable value once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    /// Record identifier; 0 by convention in a create request
    pub id: i64,
    pub ip_address: String,
    pub name: String,
    /// Installed memory as displayed (e.g. "16 GB")
    pub memory: String,
    /// Server class (e.g. "Web server", "Mail server")
    #[serde(rename = "type")]
    pub server_type: String,
    pub image_url: String,
    pub status: Status,
}

impl ServerRecord {
    /// Is this record a create request (no identifier assigned yet)?
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// Payload of an [`EnvelopeResponse`]. List-shaped operations populate
/// `servers`, single-record operations populate `server`; both may be
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<ServerRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerRecord>,
}

/// Uniform response wrapper returned by every remote operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResponse {
    pub timestamp: DateTime<Utc>,
    pub status_code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,
    #[serde(default)]
    pub data: EnvelopeData,
}

impl EnvelopeResponse {
    /// Records carried in `data.servers`, absent treated as empty
    pub fn servers(&self) -> &[ServerRecord] {
        self.data.servers.as_deref().unwrap_or_default()
    }
}
