use super::{Params, ParamsError, RequestConfig};
use crate::domain::{CancelNotification, CreateNotification, HttpMethod, KeyType};

impl RequestConfig for CreateNotification {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn endpoint(&self) -> String {
        "notifications".to_owned()
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        let mut params = Params::with_method(self.http_method());
        params.set_json_body(self)?;
        Ok(params)
    }
}

impl RequestConfig for CancelNotification {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Delete
    }

    fn endpoint(&self) -> String {
        format!("notifications/{}", self.id().as_str())
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        Ok(Params::with_method(self.http_method()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{Content, Field, Filter, Filters, NotificationId, Relation};

    fn sample() -> CreateNotification {
        let mut filters = Filters::new();
        filters
            .add_filter(Filter::new(Field::Tag).key("vip").relation(Relation::Equal).value("true"))
            .add_or()
            .add_filter(Filter::new(Field::SessionCount).relation(Relation::GreaterThan).value("5"));

        CreateNotification::new()
            .add_message([Content::english("Hello", "Greeting")])
            .with_filters(filters)
    }

    #[test]
    fn create_notification_params_carry_json_body() {
        let request = sample();
        let params = request.to_params().unwrap();

        assert_eq!(request.endpoint(), "notifications");
        assert_eq!(params.method(), Some(HttpMethod::Post));
        assert!(params.query_pairs().is_empty());

        let body: serde_json::Value = serde_json::from_slice(params.body().unwrap()).unwrap();
        assert_eq!(body["contents"], json!({"en": "Hello"}));
        assert_eq!(body["filters"][1], json!({"operator": "OR"}));
    }

    #[test]
    fn to_params_is_repeatable() {
        let request = sample();
        assert_eq!(request.to_params().unwrap(), request.to_params().unwrap());
    }

    #[test]
    fn cancel_notification_has_no_body() {
        let request = CancelNotification::new(NotificationId::new("n-42").unwrap());
        let params = request.to_params().unwrap();

        assert_eq!(request.endpoint(), "notifications/n-42");
        assert_eq!(params.method(), Some(HttpMethod::Delete));
        assert_eq!(params.body(), None);
        assert_eq!(CancelNotification::KEY_TYPE, KeyType::RestApi);
    }
}
