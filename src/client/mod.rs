//! Client layer: assembles requests, dispatches them, and maps responses to domain types.

mod http;

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

use http::ReqwestTransport;

use crate::domain::{
    AddDevice, AddDeviceResponse, App, AppId, CancelNotification, CancelNotificationResponse,
    CreateApp, CreateNotification, CreateNotificationResponse, Device, DeviceList, EditDevice,
    EditDeviceResponse, HttpMethod, KeyType, RestApiKey, UserAuthKey, ValidationError,
    ViewDevice, ViewDevices,
};
use crate::transport::{
    Params, ParamsError, QueryKey, RequestConfig, decode_api_error, decode_json_response,
};

/// Base URL template; `%s` is replaced with the endpoint path.
pub const DEFAULT_API_ENDPOINT: &str = "https://onesignal.com/api/v1/%s";

const CONTENT_TYPE: &str = "application/json; charset=utf-8";

const ENV_USER_AUTH_KEY: &str = "ONESIGNAL_USER_AUTH_KEY";
const ENV_APP_ID: &str = "ONESIGNAL_APP_ID";
const ENV_REST_API_KEY: &str = "ONESIGNAL_REST_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
/// The two secrets and the app id a client works with.
pub struct Credentials {
    user_auth_key: UserAuthKey,
    app_id: AppId,
    rest_api_key: RestApiKey,
}

impl Credentials {
    /// Validate and bundle the account key, app id and app REST key.
    pub fn new(
        user_auth_key: impl Into<String>,
        app_id: impl Into<String>,
        rest_api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user_auth_key: UserAuthKey::new(user_auth_key)?,
            app_id: AppId::new(app_id)?,
            rest_api_key: RestApiKey::new(rest_api_key)?,
        })
    }

    /// Read `ONESIGNAL_USER_AUTH_KEY`, `ONESIGNAL_APP_ID` and `ONESIGNAL_REST_API_KEY`.
    pub fn from_env() -> Result<Self, ValidationError> {
        let read = |name: &'static str| {
            std::env::var(name).map_err(|_| ValidationError::MissingEnvVar { name })
        };
        Self::new(
            read(ENV_USER_AUTH_KEY)?,
            read(ENV_APP_ID)?,
            read(ENV_REST_API_KEY)?,
        )
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    fn key_for(&self, key_type: Option<KeyType>) -> &str {
        match key_type {
            Some(KeyType::UserAuth) => self.user_auth_key.as_str(),
            Some(KeyType::RestApi) => self.rest_api_key.as_str(),
            None => "",
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`OneSignalClient`].
pub enum OneSignalError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-200 response carrying the API error envelope.
    #[error("API error: status: {status}; error: {message}")]
    Api { status: i64, message: String },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The outbound JSON body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] ParamsError),

    /// The API endpoint template did not produce a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A parameter bag reached the dispatcher without an HTTP method.
    #[error("request parameters have no HTTP method")]
    MissingMethod,

    /// The operation exists in the API but is not supported by this client.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AppIdPlacement {
    Query,
    Body,
}

/// Builder for [`OneSignalClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or transport.
pub struct OneSignalClientBuilder {
    credentials: Credentials,
    api_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl OneSignalClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API base template. A `%s` placeholder marks where the
    /// endpoint path goes; without one the path is appended after a `/`.
    /// Any query string in the template is dropped; only the request's own
    /// query parameters are sent.
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport. `timeout` and `user_agent` are then ignored.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`OneSignalClient`].
    pub fn build(self) -> Result<OneSignalClient, OneSignalError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| OneSignalError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client }) as Arc<dyn HttpTransport>
            }
        };

        Ok(OneSignalClient {
            credentials: self.credentials,
            api_endpoint: self.api_endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level OneSignal client.
///
/// Holds only immutable configuration and a shared transport, so clones are
/// cheap and concurrent calls do not interfere. Every call is a single,
/// independent request: there is no retry or backoff.
pub struct OneSignalClient {
    credentials: Credentials,
    api_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl OneSignalClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`OneSignalClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> OneSignalClientBuilder {
        OneSignalClientBuilder::new(credentials)
    }

    /// Change the API base template used by this instance.
    pub fn set_api_endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn app_id(&self) -> &AppId {
        &self.credentials.app_id
    }

    /// Send one request built from `params` to `endpoint` and return the raw body.
    ///
    /// The `Authorization` header is `Basic <base64(key)>` where the key is
    /// chosen by the bag's key type; a bag without a key type is sent with an
    /// empty credential.
    ///
    /// Errors:
    /// - [`OneSignalError::Transport`] when the request could not be executed,
    /// - [`OneSignalError::Api`] for non-200 responses with an error envelope,
    /// - [`OneSignalError::Parse`] for non-200 responses with any other body.
    pub async fn send(&self, endpoint: &str, params: Params) -> Result<String, OneSignalError> {
        let method = params.method().ok_or(OneSignalError::MissingMethod)?;

        let mut url = format_endpoint(&self.api_endpoint, endpoint)?;
        url.set_query(None);
        let query = params.query_pairs();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let credential = STANDARD.encode(self.credentials.key_for(params.key_type()));
        let request = HttpRequest {
            method,
            url,
            headers: vec![
                ("Content-Type", CONTENT_TYPE.to_owned()),
                ("Authorization", format!("Basic {credential}")),
            ],
            body: params.body().map(<[u8]>::to_vec).unwrap_or_default(),
        };

        debug!(%method, endpoint, "sending OneSignal request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(OneSignalError::Transport)?;

        if response.status != 200 {
            let envelope = decode_api_error(&response.body)
                .map_err(|err| OneSignalError::Parse(Box::new(err)))?;
            debug!(
                http_status = response.status,
                status = envelope.status,
                error = %envelope.error,
                "OneSignal API returned an error"
            );
            return Err(OneSignalError::Api {
                status: envelope.status,
                message: envelope.error,
            });
        }

        debug!(endpoint, "OneSignal request succeeded");
        Ok(response.body)
    }

    /// Send a notification.
    ///
    /// The app id goes into the query string, and into the body when the
    /// request does not set one explicitly.
    pub async fn create_notification(
        &self,
        mut request: CreateNotification,
    ) -> Result<CreateNotificationResponse, OneSignalError> {
        request.fill_app_id(&self.credentials.app_id);
        self.call(&request, AppIdPlacement::Query).await
    }

    /// Stop a scheduled or in-progress notification.
    pub async fn cancel_notification(
        &self,
        request: CancelNotification,
    ) -> Result<CancelNotificationResponse, OneSignalError> {
        self.call(&request, AppIdPlacement::Query).await
    }

    /// List every app of the account. Authorized with the user auth key.
    pub async fn view_apps(&self) -> Result<Vec<App>, OneSignalError> {
        let params = Params::with_method(HttpMethod::Get).set_key_type(KeyType::UserAuth);
        let body = self.send("apps", params).await?;
        decode(&body)
    }

    /// Fetch the client's own app.
    pub async fn view_app(&self) -> Result<App, OneSignalError> {
        let params = Params::with_method(HttpMethod::Get).set_key_type(KeyType::RestApi);
        let endpoint = format!("apps/{}", self.credentials.app_id.as_str());
        let body = self.send(&endpoint, params).await?;
        decode(&body)
    }

    /// Create a new app. Authorized with the user auth key.
    pub async fn create_app(&self, request: CreateApp) -> Result<App, OneSignalError> {
        self.call(&request, AppIdPlacement::Query).await
    }

    pub async fn view_devices(&self, request: ViewDevices) -> Result<DeviceList, OneSignalError> {
        self.call(&request, AppIdPlacement::Query).await
    }

    pub async fn view_device(&self, request: ViewDevice) -> Result<Device, OneSignalError> {
        self.call(&request, AppIdPlacement::Query).await
    }

    /// Register a device, or update it if the identifier is already known.
    ///
    /// `request.app_id` is replaced with the client's app id.
    pub async fn add_device(
        &self,
        mut request: AddDevice,
    ) -> Result<AddDeviceResponse, OneSignalError> {
        request.app_id = Some(self.credentials.app_id.clone());
        self.call(&request, AppIdPlacement::Body).await
    }

    /// `request.app_id` is replaced with the client's app id.
    pub async fn edit_device(
        &self,
        mut request: EditDevice,
    ) -> Result<EditDeviceResponse, OneSignalError> {
        request.app_id = Some(self.credentials.app_id.clone());
        self.call(&request, AppIdPlacement::Body).await
    }

    pub fn update_app(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("update app"))
    }

    pub fn edit_tags_with_external_user_id(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("edit tags with external user id"))
    }

    pub fn csv_export(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("CSV export"))
    }

    pub fn view_notification(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("view notification"))
    }

    pub fn view_notifications(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("view notifications"))
    }

    pub fn notification_history(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("notification history"))
    }

    pub fn create_segment(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("create segment"))
    }

    pub fn delete_segment(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("delete segment"))
    }

    pub fn view_outcomes(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("view outcomes"))
    }

    pub fn delete_user_record(&self) -> Result<(), OneSignalError> {
        Err(OneSignalError::Unsupported("delete user record"))
    }

    async fn call<C, T>(&self, config: &C, placement: AppIdPlacement) -> Result<T, OneSignalError>
    where
        C: RequestConfig + Sync,
        T: DeserializeOwned,
    {
        let mut params = config.to_params()?;
        if placement == AppIdPlacement::Query {
            params.add_query_if_non_empty(QueryKey::AppId, self.credentials.app_id.as_str());
        }

        let body = self
            .send(&config.endpoint(), params.set_key_type(C::KEY_TYPE))
            .await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, OneSignalError> {
    decode_json_response(body).map_err(|err| OneSignalError::Parse(Box::new(err)))
}

fn format_endpoint(template: &str, endpoint: &str) -> Result<Url, OneSignalError> {
    let formatted = if template.contains("%s") {
        template.replacen("%s", endpoint, 1)
    } else {
        format!("{}/{}", template.trim_end_matches('/'), endpoint)
    };
    Ok(Url::parse(&formatted)?)
}
