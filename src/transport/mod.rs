//! Transport layer: request shaping and wire-format details (serialization/deserialization).

mod api_error;
mod app;
mod device;
mod notification;
mod params;

pub use api_error::{ApiErrorEnvelope, decode_api_error};
pub use params::{Literal, Param, Params, ParamsError, QueryKey, Slot};

use serde::de::DeserializeOwned;

use crate::domain::{HttpMethod, KeyType};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single API operation: where it goes, how it is sent, and what it carries.
pub trait RequestConfig {
    /// Secret that authorizes this operation.
    const KEY_TYPE: KeyType;

    fn http_method(&self) -> HttpMethod;

    /// Path relative to the API base, e.g. `players/{id}`.
    fn endpoint(&self) -> String;

    /// Build a fresh parameter bag. The key type is set by the client.
    fn to_params(&self) -> Result<Params, ParamsError>;
}

pub fn decode_json_response<T: DeserializeOwned>(json: &str) -> Result<T, TransportError> {
    Ok(serde_json::from_str(json)?)
}
