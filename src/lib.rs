//! Typed Rust client for the OneSignal push notification REST API.
//!
//! The crate is split into a domain layer of strong request/response types,
//! a transport layer that projects each request into a parameter bag, and a
//! small client layer that dispatches bags over HTTP and decodes the result.
//!
//! ```rust,no_run
//! use onesignal::{Content, CreateNotification, Credentials, OneSignalClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), onesignal::OneSignalError> {
//!     let client = OneSignalClient::new(Credentials::new("user-key", "app-id", "rest-key")?);
//!     let request = CreateNotification::new()
//!         .add_message([Content::english("Hello", "Greeting")])
//!         .add_device(["player-id"]);
//!     let response = client.create_notification(request).await?;
//!     println!("sent {} to {} recipients", response.id, response.recipients);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_API_ENDPOINT, HttpRequest, HttpResponse, HttpTransport, OneSignalClient,
    OneSignalClientBuilder, OneSignalError,
};
pub use domain::{
    ActionButtons, AddDevice, AddDeviceResponse, ApnsEnv, App, AppId, Attachments, Button,
    CancelNotification, CancelNotificationResponse, Content, ContentAndLanguage, CreateApp,
    CreateNotification, CreateNotificationResponse, DelayedOption, Delivery, Device, DeviceIds,
    DeviceList, DeviceType, EditDevice, EditDeviceResponse, Field, Filter, FilterElement, Filters,
    GroupingAndCollapsing, HttpMethod, KeyType, LocalizedContent, NotificationId,
    NotificationTypes, Operator, PlayerId, Relation, RestApiKey, SpecificDevices, UserAuthKey,
    VIEW_DEVICES_MAX_LIMIT, ValidationError, ViewDevice, ViewDevices,
};
pub use transport::{
    ApiErrorEnvelope, Literal, Param, Params, ParamsError, QueryKey, RequestConfig, Slot,
};
