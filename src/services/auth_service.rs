use crate::error::ClientResult;
use crate::models::{ApiEnvelope, LoginContent, LoginRequest};
use crate::services::api_client::ApiClient;

const LOGIN_ENDPOINT: &str = "/auth/login";

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Perform login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginContent> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let envelope: ApiEnvelope<LoginContent> = self.api.post(LOGIN_ENDPOINT, &request).await?;
        envelope.into_content("Login failed")
    }
}
