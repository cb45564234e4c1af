use super::{
    client::ApiClient,
    types::{Credentials, LoginResponse, TransportError},
};

pub const LOGIN_PATH: &str = "/login";

impl ApiClient {
    /// Posts the credentials and returns whatever the backend answered.
    /// Rejections come back as a body without a token, not as an error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, TransportError> {
        let body = self.post(LOGIN_PATH, credentials).await?;
        Ok(LoginResponse::from_json(body))
    }
}
