//! Inbound (Driving) port: the hooks an HTTP client runs on every call.

use crate::domain::{ApiEnvelope, SessionError, TransportError};

/// Interception points of a backend call.
///
/// A client calls [`on_outgoing_request`](Self::on_outgoing_request) before
/// sending, then exactly one of [`on_response`](Self::on_response) (2xx with
/// an envelope body) or [`on_transport_error`](Self::on_transport_error).
pub trait SessionHooks: Send + Sync {
    /// Attach credentials to an outbound request.
    fn on_outgoing_request(&self, request: reqwest::Request) -> reqwest::Request;

    /// Inspect the application envelope of a delivered response.
    ///
    /// # Returns
    /// - `Ok(envelope)`: the envelope, unchanged, when its code is success
    /// - `Err(SessionError::Application)`: any other code
    fn on_response(&self, envelope: ApiEnvelope) -> Result<ApiEnvelope, SessionError>;

    /// React to a transport failure. The error is always handed back.
    fn on_transport_error(&self, error: TransportError) -> SessionError;
}
