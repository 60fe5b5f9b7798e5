use super::{Params, ParamsError, QueryKey, RequestConfig};
use crate::domain::{AddDevice, EditDevice, HttpMethod, KeyType, ViewDevice, ViewDevices};

impl RequestConfig for ViewDevices {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        "players".to_owned()
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        let mut params = Params::with_method(self.http_method());
        params.add_query_if_non_zero(QueryKey::Limit, i64::from(self.limit()));
        params.add_query_if_non_zero(QueryKey::Offset, i64::from(self.offset()));
        Ok(params)
    }
}

impl RequestConfig for ViewDevice {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        format!("players/{}", self.id().as_str())
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        let mut params = Params::with_method(self.http_method());
        if let Some(hash) = self.email_auth_hash() {
            params.add_query_if_non_empty(QueryKey::EmailAuthHash, hash);
        }
        Ok(params)
    }
}

impl RequestConfig for AddDevice {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn endpoint(&self) -> String {
        "players".to_owned()
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        let mut params = Params::with_method(self.http_method());
        params.set_json_body(self)?;
        Ok(params)
    }
}

impl RequestConfig for EditDevice {
    const KEY_TYPE: KeyType = KeyType::RestApi;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn endpoint(&self) -> String {
        format!("players/{}", self.id.as_str())
    }

    fn to_params(&self) -> Result<Params, ParamsError> {
        let mut params = Params::with_method(self.http_method());
        params.set_json_body(self)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeviceType, PlayerId};

    #[test]
    fn view_devices_sends_only_non_zero_paging() {
        let params = ViewDevices::new(10, 0).unwrap().to_params().unwrap();
        assert_eq!(params.method(), Some(HttpMethod::Get));
        assert_eq!(params.query_pairs(), vec![("limit", "10")]);

        let params = ViewDevices::new(50, 100).unwrap().to_params().unwrap();
        assert_eq!(
            params.query_pairs(),
            vec![("limit", "50"), ("offset", "100")]
        );

        let params = ViewDevices::default().to_params().unwrap();
        assert!(params.query_pairs().is_empty());
    }

    #[test]
    fn view_device_path_and_optional_hash() {
        let request = ViewDevice::new(PlayerId::new("p-1").unwrap());
        assert_eq!(request.endpoint(), "players/p-1");
        assert!(request.to_params().unwrap().query_pairs().is_empty());

        let request = request.with_email_auth_hash("h4sh");
        assert_eq!(
            request.to_params().unwrap().query_pairs(),
            vec![("email_auth_hash", "h4sh")]
        );
    }

    #[test]
    fn add_device_posts_json_body() {
        let mut request = AddDevice::new(DeviceType::Android);
        request.identifier = Some("token".to_owned());
        let params = request.to_params().unwrap();

        assert_eq!(request.endpoint(), "players");
        assert_eq!(params.method(), Some(HttpMethod::Post));
        assert_eq!(
            params.body(),
            Some(br#"{"device_type":1,"identifier":"token"}"#.as_slice())
        );
    }

    #[test]
    fn edit_device_puts_to_player_path() {
        let request = EditDevice::new(PlayerId::new("p-9").unwrap()).external_user_id("u-1");
        let params = request.to_params().unwrap();

        assert_eq!(request.endpoint(), "players/p-9");
        assert_eq!(params.method(), Some(HttpMethod::Put));
        assert_eq!(
            params.body(),
            Some(br#"{"external_user_id":"u-1"}"#.as_slice())
        );
    }
}
