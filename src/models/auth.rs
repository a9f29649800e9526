use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub user_type: String,
}

/// `content` of a successful `POST /auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginContent {
    pub access_token: String,
    pub user: User,
}

/// Record kept in session storage between page loads
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

impl From<LoginContent> for PersistedSession {
    fn from(content: LoginContent) -> Self {
        Self {
            token: content.access_token,
            user: content.user,
        }
    }
}

impl PersistedSession {
    /// A record with a blank token is treated as malformed
    pub fn is_well_formed(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
