use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::{AppId, PlayerId};

pub const VIEW_DEVICES_MAX_LIMIT: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApnsEnv {
    Sandbox,
    Production,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Request body for `POST apps`.
pub struct CreateApp {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_env: Option<ApnsEnv>,
    /// Base64 encoded p12 certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_p12_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_gcm_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_default_notification_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_web_sub_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_site_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_apns_p12: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_apns_p12_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari_icon_256_256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome_key: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub additional_data_is_root_payload: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl CreateApp {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self {
            name,
            ..Default::default()
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// `GET players`: page through the devices of the client's app.
///
/// A zero `limit` or `offset` is not sent, leaving the server defaults.
pub struct ViewDevices {
    limit: u32,
    offset: u32,
}

impl ViewDevices {
    pub fn new(limit: u32, offset: u32) -> Result<Self, ValidationError> {
        if limit > VIEW_DEVICES_MAX_LIMIT {
            return Err(ValidationError::LimitOutOfRange {
                max: VIEW_DEVICES_MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `GET players/{id}`.
pub struct ViewDevice {
    id: PlayerId,
    email_auth_hash: Option<String>,
}

impl ViewDevice {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            email_auth_hash: None,
        }
    }

    /// Required for email devices when identity verification is enabled.
    pub fn with_email_auth_hash(mut self, hash: impl Into<String>) -> Self {
        self.email_auth_hash = Some(hash.into());
        self
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn email_auth_hash(&self) -> Option<&str> {
        self.email_auth_hash.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Device platform, sent as its integer code.
pub enum DeviceType {
    Ios,
    Android,
    Amazon,
    WindowsPhone,
    ChromeAppsAndExtensions,
    ChromeWebPush,
    WindowsWns,
    Safari,
    Firefox,
    MacOs,
    Alexa,
    Email,
    HuaweiApp,
    Sms,
}

impl DeviceType {
    pub fn code(self) -> u8 {
        match self {
            Self::Ios => 0,
            Self::Android => 1,
            Self::Amazon => 2,
            Self::WindowsPhone => 3,
            Self::ChromeAppsAndExtensions => 4,
            Self::ChromeWebPush => 5,
            Self::WindowsWns => 6,
            Self::Safari => 7,
            Self::Firefox => 8,
            Self::MacOs => 9,
            Self::Alexa => 10,
            Self::Email => 11,
            // 12 is unassigned.
            Self::HuaweiApp => 13,
            Self::Sms => 14,
        }
    }
}

impl Serialize for DeviceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationTypes {
    Subscribed,
    Unsubscribed,
}

impl NotificationTypes {
    pub fn code(self) -> i8 {
        match self {
            Self::Subscribed => 1,
            Self::Unsubscribed => -2,
        }
    }
}

impl Serialize for NotificationTypes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i8(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Request body for `POST players`.
///
/// Registering an identifier that already exists updates that device instead.
/// `app_id` is always overwritten with the client's app id before sending.
pub struct AddDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<AppId>,
    pub device_type: DeviceType,
    /// Push token, email address or phone number depending on `device_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_auth_hash: Option<String>,
    /// 1 = development, 2 = ad-hoc. Omit for App Store builds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Seconds from UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_count: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// USD, up to two decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_types: Option<NotificationTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// ISO 3166-1 alpha-2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_id_auth_hash: Option<String>,
}

impl AddDevice {
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            app_id: None,
            device_type,
            identifier: None,
            identifier_auth_hash: None,
            test_type: None,
            language: None,
            timezone: None,
            game_version: None,
            device_model: None,
            device_os: None,
            ad_id: None,
            sdk: None,
            session_count: None,
            tags: BTreeMap::new(),
            amount_spent: None,
            created_at: None,
            playtime: None,
            last_active: None,
            notification_types: None,
            long: None,
            lat: None,
            country: None,
            external_user_id: None,
            external_user_id_auth_hash: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Request body for `PUT players/{id}`.
///
/// `app_id` is always overwritten with the client's app id before sending.
pub struct EditDevice {
    #[serde(skip)]
    pub id: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<AppId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_id: Option<String>,
}

impl EditDevice {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            app_id: None,
            external_user_id: None,
        }
    }

    pub fn external_user_id(mut self, external_user_id: impl Into<String>) -> Self {
        self.external_user_id = Some(external_user_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn view_devices_limit_is_enforced() {
        assert!(ViewDevices::new(VIEW_DEVICES_MAX_LIMIT, 0).is_ok());
        assert!(matches!(
            ViewDevices::new(VIEW_DEVICES_MAX_LIMIT + 1, 0),
            Err(ValidationError::LimitOutOfRange { max: 300, actual: 301 })
        ));
    }

    #[test]
    fn create_app_requires_name() {
        assert!(matches!(
            CreateApp::new("  "),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn create_app_omits_unset_fields() {
        let mut app = CreateApp::new("Demo").unwrap();
        app.apns_env = Some(ApnsEnv::Sandbox);
        assert_eq!(
            serde_json::to_value(&app).unwrap(),
            json!({"name": "Demo", "apns_env": "sandbox"})
        );
    }

    #[test]
    fn add_device_uses_integer_codes() {
        let mut device = AddDevice::new(DeviceType::Sms);
        device.identifier = Some("+15555550100".to_owned());
        device.notification_types = Some(NotificationTypes::Unsubscribed);
        device.tags.insert("plan".to_owned(), "pro".to_owned());

        assert_eq!(
            serde_json::to_value(&device).unwrap(),
            json!({
                "device_type": 14,
                "identifier": "+15555550100",
                "tags": {"plan": "pro"},
                "notification_types": -2,
            })
        );
        assert_eq!(DeviceType::Email.code(), 11);
        assert_eq!(DeviceType::HuaweiApp.code(), 13);
    }

    #[test]
    fn edit_device_keeps_id_out_of_body() {
        let edit = EditDevice::new(PlayerId::new("p1").unwrap()).external_user_id("u1");
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            json!({"external_user_id": "u1"})
        );
    }
}
