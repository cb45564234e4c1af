use crate::api::{ApiClient, Credentials, LoginResponse, TransportError};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, TransportError> {
        self.client.login(credentials).await
    }
}
