use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::content::{Content, DeviceIds, LocalizedContent};
use crate::domain::filter::Filters;
use crate::domain::value::{AppId, NotificationId};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Explicit device targeting, split into two independent channels.
pub struct SpecificDevices {
    /// OneSignal player ids.
    #[serde(rename = "include_player_ids", skip_serializing_if = "DeviceIds::is_empty")]
    pub player_ids: DeviceIds,
    /// Ids assigned by your own backend.
    #[serde(
        rename = "include_external_user_ids",
        skip_serializing_if = "DeviceIds::is_empty"
    )]
    pub external_user_ids: DeviceIds,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentAndLanguage {
    /// Internal campaign name, not shown to users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "LocalizedContent::is_empty")]
    pub contents: LocalizedContent,
    #[serde(skip_serializing_if = "LocalizedContent::is_empty")]
    pub headings: LocalizedContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attachments {
    /// Custom key/value payload delivered to the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Button {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionButtons {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub web_buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DelayedOption {
    /// Deliver at `delivery_time_of_day` in each user's own timezone.
    #[serde(rename = "timezone")]
    Timezone,
    /// Deliver at the time each user is usually active.
    #[serde(rename = "last-active")]
    LastActive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Delivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_option: Option<DelayedOption>,
    /// Local time of day, e.g. `9:00AM`. Used with [`DelayedOption::Timezone`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_of_day: Option<String>,
    /// Seconds the push service keeps the notification if the device is offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_push_type_override: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingAndCollapsing {
    #[serde(skip_serializing_if = "LocalizedContent::is_empty")]
    pub android_group: LocalizedContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Request body for `POST notifications`.
///
/// The sub-objects are flattened into a single JSON object on the wire.
/// `app_id` is filled in by the client before sending when left unset.
pub struct CreateNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<AppId>,
    #[serde(skip_serializing_if = "Filters::is_empty")]
    filters: Filters,
    #[serde(flatten)]
    devices: SpecificDevices,
    #[serde(flatten)]
    content: ContentAndLanguage,
    #[serde(flatten)]
    attachments: Attachments,
    #[serde(flatten)]
    buttons: ActionButtons,
    #[serde(flatten)]
    delivery: Delivery,
    #[serde(flatten)]
    grouping: GroupingAndCollapsing,
}

impl CreateNotification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add message bodies (`contents`) and titles (`headings`), one per locale.
    ///
    /// Empty titles are not sent.
    pub fn add_message(mut self, contents: impl IntoIterator<Item = Content>) -> Self {
        for content in contents {
            self.content
                .contents
                .add(content.locale.clone(), content.message);
            if !content.title.is_empty() {
                self.content.headings.add(content.locale, content.title);
            }
        }
        self
    }

    pub fn add_device<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.devices.player_ids.add_device(id);
        }
        self
    }

    pub fn add_external_user_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.devices.external_user_ids.add_device(id);
        }
        self
    }

    pub fn add_data(mut self, data: serde_json::Value) -> Self {
        self.attachments.data = Some(data);
        self
    }

    pub fn add_android_grouping(
        mut self,
        locale: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.grouping.android_group.add(locale, message);
        self
    }

    /// Attach an audience filter expression. It is not modified afterwards.
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.content.name = Some(name.into());
        self
    }

    pub fn with_buttons(mut self, buttons: ActionButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn send_after(mut self, at: DateTime<Utc>) -> Self {
        self.delivery.send_after = Some(at);
        self
    }

    pub fn with_app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    pub fn app_id(&self) -> Option<&AppId> {
        self.app_id.as_ref()
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn devices(&self) -> &SpecificDevices {
        &self.devices
    }

    pub fn content(&self) -> &ContentAndLanguage {
        &self.content
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    pub(crate) fn fill_app_id(&mut self, app_id: &AppId) {
        if self.app_id.is_none() {
            self.app_id = Some(app_id.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `DELETE notifications/{id}`: stop a scheduled or in-progress notification.
pub struct CancelNotification {
    id: NotificationId,
}

impl CancelNotification {
    pub fn new(id: NotificationId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::domain::filter::{Field, Filter, Relation};

    #[test]
    fn sub_objects_are_flattened_into_one_object() {
        let mut filters = Filters::new();
        filters.add_filter(Filter::new(Field::Country).relation(Relation::Equal).value("US"));

        let request = CreateNotification::new()
            .add_message([
                Content::english("New message", "Header"),
                Content::russian("Новое сообщение", ""),
            ])
            .add_device(["a", "b"])
            .add_external_user_ids(["ext-1"])
            .add_data(json!({"foo": "bar"}))
            .add_android_grouping("en", "Group")
            .with_filters(filters)
            .send_after(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "filters": [{"field": "country", "relation": "=", "value": "US"}],
                "include_player_ids": ["a", "b"],
                "include_external_user_ids": ["ext-1"],
                "contents": {"en": "New message", "ru": "Новое сообщение"},
                "headings": {"en": "Header"},
                "data": {"foo": "bar"},
                "android_group": {"en": "Group"},
                "send_after": "2024-01-02T03:04:05Z",
            })
        );
    }

    #[test]
    fn device_channels_serialize_independently() {
        let request = CreateNotification::new()
            .add_device(["a"])
            .add_device(["b"])
            .add_external_user_ids(["x"]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["include_player_ids"], json!(["a", "b"]));
        assert_eq!(value["include_external_user_ids"], json!(["x"]));
    }

    #[test]
    fn empty_request_serializes_to_empty_object() {
        let value = serde_json::to_value(CreateNotification::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn empty_filter_list_is_omitted() {
        let value = serde_json::to_value(CreateNotification::new().with_filters(Filters::new()))
            .unwrap();
        assert!(value.get("filters").is_none());
        assert_eq!(value, json!({}));
    }

    #[test]
    fn fill_app_id_keeps_explicit_value() {
        let explicit = AppId::new("explicit").unwrap();
        let mut request = CreateNotification::new().with_app_id(explicit.clone());
        request.fill_app_id(&AppId::new("client").unwrap());
        assert_eq!(request.app_id(), Some(&explicit));

        let mut request = CreateNotification::new();
        request.fill_app_id(&AppId::new("client").unwrap());
        assert_eq!(request.app_id().map(AppId::as_str), Some("client"));
    }

    #[test]
    fn delayed_option_uses_wire_names() {
        let delivery = Delivery {
            delayed_option: Some(DelayedOption::LastActive),
            ttl: Some(3600),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(delivery).unwrap(),
            json!({"delayed_option": "last-active", "ttl": 3600})
        );
    }
}
