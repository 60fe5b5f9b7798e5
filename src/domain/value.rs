use std::fmt;

use serde::Serialize;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// OneSignal application id (`app_id`).
///
/// Invariant: non-empty after trimming, no `/`, `?` or `#`.
pub struct AppId(String);

impl AppId {
    /// Field name used by OneSignal (`app_id`).
    pub const FIELD: &'static str = "app_id";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated app id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Account-level key, used for operations spanning apps (`apps` listing, app creation).
///
/// Invariant: non-empty after trimming. The value is redacted from `Debug` output.
pub struct UserAuthKey(String);

impl UserAuthKey {
    pub const FIELD: &'static str = "user_auth_key";

    /// Create a validated [`UserAuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserAuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserAuthKey(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// App-level REST API key.
///
/// Invariant: non-empty after trimming. The value is redacted from `Debug` output.
pub struct RestApiKey(String);

impl RestApiKey {
    pub const FIELD: &'static str = "rest_api_key";

    /// Create a validated [`RestApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RestApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RestApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// OneSignal player (device) id.
///
/// Invariant: non-empty after trimming, no `/`, `?` or `#`.
pub struct PlayerId(String);

impl PlayerId {
    pub const FIELD: &'static str = "id";

    /// Create a validated [`PlayerId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Notification id returned by the create-notification endpoint.
///
/// Invariant: non-empty after trimming, no `/`, `?` or `#`.
pub struct NotificationId(String);

impl NotificationId {
    pub const FIELD: &'static str = "notification_id";

    /// Create a validated [`NotificationId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        path_segment(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ids are spliced into URL paths, so separators that would change the path
/// or start a query or fragment are rejected.
fn path_segment(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if let Some(character) = trimmed.chars().find(|c| matches!(c, '/' | '?' | '#')) {
        return Err(ValidationError::InvalidCharacter { field, character });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which of the two client secrets authorizes a request.
pub enum KeyType {
    /// Account-level [`UserAuthKey`].
    UserAuth,
    /// App-level [`RestApiKey`].
    RestApi,
}
