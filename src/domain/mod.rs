//! Domain layer: strong types with validation and invariants (no I/O).

mod content;
mod filter;
mod notification;
mod request;
mod response;
mod validation;
mod value;

pub use content::{Content, DeviceIds, LocalizedContent};
pub use filter::{Field, Filter, FilterElement, Filters, Operator, Relation};
pub use notification::{
    ActionButtons, Attachments, Button, CancelNotification, ContentAndLanguage,
    CreateNotification, DelayedOption, Delivery, GroupingAndCollapsing, SpecificDevices,
};
pub use request::{
    AddDevice, ApnsEnv, CreateApp, DeviceType, EditDevice, NotificationTypes,
    VIEW_DEVICES_MAX_LIMIT, ViewDevice, ViewDevices,
};
pub use response::{
    AddDeviceResponse, App, CancelNotificationResponse, CreateNotificationResponse, Device,
    DeviceList, EditDeviceResponse,
};
pub use validation::ValidationError;
pub use value::{
    AppId, HttpMethod, KeyType, NotificationId, PlayerId, RestApiKey, UserAuthKey,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_rejects_empty() {
        assert!(matches!(
            AppId::new("   "),
            Err(ValidationError::Empty {
                field: AppId::FIELD
            })
        ));
    }

    #[test]
    fn ids_are_trimmed() {
        assert_eq!(PlayerId::new(" p-1 ").unwrap().as_str(), "p-1");
        assert_eq!(NotificationId::new("n-1\n").unwrap().as_str(), "n-1");
    }

    #[test]
    fn ids_reject_url_separators() {
        assert_eq!(
            PlayerId::new("p-1?x=1#frag"),
            Err(ValidationError::InvalidCharacter {
                field: PlayerId::FIELD,
                character: '?'
            })
        );
        assert!(matches!(
            NotificationId::new("n-1/../apps"),
            Err(ValidationError::InvalidCharacter { character: '/', .. })
        ));
        assert!(matches!(
            AppId::new("app#1"),
            Err(ValidationError::InvalidCharacter { character: '#', .. })
        ));
        assert!(PlayerId::new("d8e8f1b2-0c4a-11ee-be56-0242ac120002").is_ok());
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let key = RestApiKey::new("super-secret").unwrap();
        assert_eq!(format!("{key:?}"), "RestApiKey(***)");
        let key = UserAuthKey::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }

    #[test]
    fn http_method_literals() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn device_list_decodes_minimal_payload() {
        let json = r#"
        {
          "total_count": 1,
          "offset": 0,
          "limit": 10,
          "players": [
            {"id": "p-1", "identifier": "tok", "session_count": 3, "tags": {"a": "b"}}
          ]
        }
        "#;
        let list: DeviceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_count, 1);
        assert_eq!(list.players[0].id, "p-1");
        assert_eq!(list.players[0].session_count, 3);
    }

    #[test]
    fn app_decodes_timestamps() {
        let json = r#"{"id": "a-1", "name": "Demo", "created_at": "2014-04-01T04:20:02.003Z"}"#;
        let app: App = serde_json::from_str(json).unwrap();
        assert_eq!(app.name, "Demo");
        assert!(app.created_at.is_some());
        assert!(app.updated_at.is_none());
    }
}
