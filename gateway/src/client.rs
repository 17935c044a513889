//! HTTP access object for the server resource collection
//!
//! Maps the five remote operations (list, get, save, ping, delete) onto the
//! uniform [`EnvelopeResponse`] wrapper and normalizes every transport
//! failure into a single error shape. Also hosts the local status filter,
//! which touches no network at all.

use reqwest::{Client, RequestBuilder};
use svrdash_core::{EnvelopeData, EnvelopeResponse, Error, Result, ServerRecord, Status};
use tracing::{debug, error};

use crate::config::GatewayConfig;

/// Client-side facade for the remote server collection
#[derive(Debug, Clone)]
pub struct ServerGateway {
    client: Client,
    base_url: String,
}

impl ServerGateway {
    /// Create a gateway with its own HTTP client
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a gateway over a caller-supplied HTTP client
    pub fn with_client(client: Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Resource root this gateway talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all servers
    pub async fn list(&self) -> Result<EnvelopeResponse> {
        let url = format!("{}/list", self.base_url);
        self.request("list", self.client.get(&url)).await
    }

    /// Fetch one server by identifier. Absence is reported by the remote
    /// side via the envelope or error; no local existence check.
    pub async fn get(&self, server_id: i64) -> Result<EnvelopeResponse> {
        let url = format!("{}/{}", self.base_url, server_id);
        self.request("get", self.client.get(&url)).await
    }

    /// Submit a new or updated record (id 0 means create)
    pub async fn save(&self, server: &ServerRecord) -> Result<EnvelopeResponse> {
        let url = format!("{}/save", self.base_url);
        self.request("save", self.client.post(&url).json(server))
            .await
    }

    /// Request a liveness probe against the given address
    pub async fn ping(&self, ip_address: &str) -> Result<EnvelopeResponse> {
        let url = format!("{}/ping/{}", self.base_url, ip_address);
        self.request("ping", self.client.get(&url)).await
    }

    /// Remove a record by identifier
    pub async fn delete(&self, server_id: i64) -> Result<EnvelopeResponse> {
        let url = format!("{}/delete/{}", self.base_url, server_id);
        self.request("delete", self.client.delete(&url)).await
    }

    /// Filter an already-fetched result set by status, with the same
    /// diagnostic logging the remote operations get. No network involved.
    pub fn filter(&self, status: Status, response: &EnvelopeResponse) -> EnvelopeResponse {
        let filtered = filter_servers(status, response);
        debug!(status = %status, message = %filtered.message, "Filtered servers locally");
        filtered
    }

    /// Issue one request, log the outcome, and normalize any failure.
    /// Single attempt per call: no retry, no backoff.
    async fn request(&self, op: &'static str, request: RequestBuilder) -> Result<EnvelopeResponse> {
        let response = request.send().await.map_err(|e| {
            let code = e.status().map(|s| s.as_u16()).unwrap_or(0);
            error!(op = %op, code = code, error = %e, "Request failed");
            Error::RequestFailed(code)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(op = %op, code = status.as_u16(), "Server returned error status");
            return Err(Error::RequestFailed(status.as_u16()));
        }

        let envelope: EnvelopeResponse = response.json().await.map_err(|e| {
            error!(op = %op, code = status.as_u16(), error = %e, "Malformed response payload");
            Error::RequestFailed(status.as_u16())
        })?;

        debug!(
            op = %op,
            status_code = envelope.status_code,
            message = %envelope.message,
            "Response received"
        );

        Ok(envelope)
    }
}

/// Filter the servers of a fetched envelope by status.
///
/// Pure and infallible: the input is never mutated, a missing server list
/// is treated as empty, and the result is a fresh envelope with `message`
/// and `data.servers` replaced. The matched message uses the humanized
/// label while the no-match message keeps the raw token; that mismatch is
/// preserved deliberately.
pub fn filter_servers(status: Status, response: &EnvelopeResponse) -> EnvelopeResponse {
    if status == Status::All {
        return EnvelopeResponse {
            message: format!("Servers filtered by {} status", status),
            ..response.clone()
        };
    }

    let matches: Vec<ServerRecord> = response
        .servers()
        .iter()
        .filter(|server| server.status == status)
        .cloned()
        .collect();

    let message = if matches.is_empty() {
        format!("No servers of {} found", status)
    } else {
        format!("Servers filtered by {} status", status.label())
    };

    EnvelopeResponse {
        message,
        data: EnvelopeData {
            servers: Some(matches),
            server: response.data.server.clone(),
        },
        ..response.clone()
    }
}
