use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateNotificationResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub recipients: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    /// Either a list of messages or an object such as `{"invalid_player_ids": [...]}`.
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CancelNotificationResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: u64,
    #[serde(default)]
    pub messageable_players: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gcm_key: Option<String>,
    #[serde(default)]
    pub chrome_key: Option<String>,
    #[serde(default)]
    pub chrome_web_origin: Option<String>,
    #[serde(default)]
    pub chrome_web_gcm_sender_id: Option<String>,
    #[serde(default)]
    pub chrome_web_default_notification_icon: Option<String>,
    #[serde(default)]
    pub chrome_web_sub_domain: Option<String>,
    #[serde(default)]
    pub apns_env: Option<String>,
    #[serde(default)]
    pub apns_certificates: Option<String>,
    #[serde(default)]
    pub safari_apns_certificate: Option<String>,
    #[serde(default)]
    pub safari_site_origin: Option<String>,
    #[serde(default)]
    pub safari_push_id: Option<String>,
    #[serde(default)]
    pub safari_icon_16_16: Option<String>,
    #[serde(default)]
    pub safari_icon_32_32: Option<String>,
    #[serde(default)]
    pub safari_icon_64_64: Option<String>,
    #[serde(default)]
    pub safari_icon_128_128: Option<String>,
    #[serde(default)]
    pub safari_icon_256_256: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub basic_auth_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub session_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub game_version: Option<String>,
    #[serde(default)]
    pub device_os: Option<String>,
    #[serde(default)]
    pub device_type: Option<u8>,
    #[serde(default)]
    pub device_model: Option<String>,
    #[serde(default)]
    pub ad_id: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub last_active: Option<i64>,
    #[serde(default)]
    pub amount_spent: Option<f64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub invalid_identifier: bool,
    #[serde(default)]
    pub badge_count: u32,
    #[serde(default)]
    pub sdk: Option<String>,
    #[serde(default)]
    pub test_type: Option<u8>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub external_user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceList {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub players: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddDeviceResponse {
    pub success: bool,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EditDeviceResponse {
    pub success: bool,
}
