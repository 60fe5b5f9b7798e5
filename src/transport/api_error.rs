use serde::Deserialize;

use super::TransportError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Error body returned with any non-200 status.
pub struct ApiErrorEnvelope {
    pub status: i64,
    pub error: String,
}

pub fn decode_api_error(json: &str) -> Result<ApiErrorEnvelope, TransportError> {
    Ok(serde_json::from_str(json)?)
}
