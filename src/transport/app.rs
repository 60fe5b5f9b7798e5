use super::{Params, ParamsError, RequestConfig};
use crate::domain::{CreateApp, HttpMethod, KeyType};

impl RequestConfig for CreateApp {
    const KEY_TYPE: KeyType = KeyType::UserAuth;

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn endpoint(&self) -> String {
        "apps".to_owned()
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

    #[test]
    fn create_app_params() {
        let request = CreateApp::new("Demo").unwrap();
        let params = request.to_params().unwrap();

        assert_eq!(request.endpoint(), "apps");
        assert_eq!(params.method(), Some(HttpMethod::Post));
        assert_eq!(params.body(), Some(br#"{"name":"Demo"}"#.as_slice()));
        assert_eq!(CreateApp::KEY_TYPE, KeyType::UserAuth);
    }
}
