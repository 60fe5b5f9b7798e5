//! Per-request parameter bag.
//!
//! A [`Params`] value carries everything the dispatcher needs besides the
//! endpoint path: the HTTP method, which secret to authorize with, an
//! optional JSON body and the URL query entries. Each entry lives in a
//! [`Slot`] and holds one [`Param`] facet.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{HttpMethod, KeyType};

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("failed to encode JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// URL query parameter names understood by the API.
pub enum QueryKey {
    AppId,
    EmailAuthHash,
    Limit,
    Offset,
}

impl QueryKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppId => "app_id",
            Self::EmailAuthHash => "email_auth_hash",
            Self::Limit => "limit",
            Self::Offset => "offset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Method,
    KeyType,
    Payload,
    Query(QueryKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Out-of-band values that are never query-encoded.
pub enum Literal {
    Method(HttpMethod),
    KeyType(KeyType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    UrlValue(String),
    Payload(Vec<u8>),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<Slot, Param>,
}

impl Params {
    /// Start a bag for a request sent with `method`.
    pub fn with_method(method: HttpMethod) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Slot::Method, Param::Literal(Literal::Method(method)));
        Self { entries }
    }

    pub fn method(&self) -> Option<HttpMethod> {
        match self.entries.get(&Slot::Method) {
            Some(Param::Literal(Literal::Method(method))) => Some(*method),
            _ => None,
        }
    }

    /// Record which secret authorizes this request. The last call wins.
    pub fn set_key_type(mut self, key_type: KeyType) -> Self {
        self.entries
            .insert(Slot::KeyType, Param::Literal(Literal::KeyType(key_type)));
        self
    }

    pub fn key_type(&self) -> Option<KeyType> {
        match self.entries.get(&Slot::KeyType) {
            Some(Param::Literal(Literal::KeyType(key_type))) => Some(*key_type),
            _ => None,
        }
    }

    /// Encode `value` as the JSON body, replacing any previous body.
    ///
    /// Values that encode to `null` or `""` leave the bag without a body.
    pub fn set_json_body<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ParamsError> {
        let encoded = serde_json::to_value(value)?;
        match &encoded {
            serde_json::Value::Null => return Ok(()),
            serde_json::Value::String(text) if text.is_empty() => return Ok(()),
            _ => {}
        }
        let data = serde_json::to_vec(&encoded)?;
        self.entries.insert(Slot::Payload, Param::Payload(data));
        Ok(())
    }

    pub fn body(&self) -> Option<&[u8]> {
        match self.entries.get(&Slot::Payload) {
            Some(Param::Payload(data)) => Some(data),
            _ => None,
        }
    }

    /// Add a query entry unless `value` is empty; an empty value leaves the key absent.
    pub fn add_query_if_non_empty(&mut self, key: QueryKey, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.entries
                .insert(Slot::Query(key), Param::UrlValue(value));
        }
    }

    /// Add the decimal form of `value` as a query entry unless it is zero.
    pub fn add_query_if_non_zero(&mut self, key: QueryKey, value: i64) {
        if value != 0 {
            self.entries
                .insert(Slot::Query(key), Param::UrlValue(value.to_string()));
        }
    }

    /// Non-empty query entries, sorted by key name.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = self
            .entries
            .iter()
            .filter_map(|(slot, param)| match (slot, param) {
                (Slot::Query(key), Param::UrlValue(value)) if !value.is_empty() => {
                    Some((key.as_str(), value.as_str()))
                }
                _ => None,
            })
            .collect::<Vec<_>>();
        pairs.sort_by(|left, right| left.0.cmp(right.0));
        pairs
    }
}
