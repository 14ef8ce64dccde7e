use thiserror::Error;

/// Fallback shown when the backend fails without a parseable message.
pub const GENERIC_BACKEND_ERROR: &str = "Terjadi kesalahan pada server.";
/// Shown for connection-level failures (backend unreachable, timeout).
pub const NETWORK_ERROR: &str = "Tidak dapat terhubung ke server. Pastikan backend berjalan.";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not reach the backend at all.
    #[error("{NETWORK_ERROR}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status. `message` is the
    /// server-supplied text where one could be parsed, otherwise the
    /// generic fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },
}

impl ApiError {
    /// Human-readable text for notification routing. Backend messages are
    /// surfaced verbatim; network failures collapse to one generic string.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::Backend { message, .. } => message.clone(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
