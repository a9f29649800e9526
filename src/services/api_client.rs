// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// No business logic: builds the request, attaches the bearer token and
// decodes the body. Stores translate failures into their own error fields.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TransportError;
use crate::services::credentials::CredentialProvider;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Fully resolved outbound request handed to a `Transport`
#[derive(Clone, PartialEq, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Implementations never retry and never touch stores.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Cliente API: base URL + transport + credential provider
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic request: `endpoint` is relative to the base URL (e.g. "/properties").
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: Vec<(String, String)>,
        body: Option<RequestBody>,
        headers: Vec<(String, String)>,
    ) -> Result<T, TransportError> {
        let mut all_headers = headers;
        if let Some(token) = self.credentials.bearer_token() {
            all_headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            query,
            headers: all_headers,
            body,
        };

        log::debug!("🌐 {} {}", method, request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ {} {} failed: {}", method, endpoint, e);
            e
        })?;

        if !response.ok() {
            log::error!("❌ {} {} -> HTTP {}", method, endpoint, response.status);
            return Err(TransportError::Status {
                status: response.status,
                message: error_message(response),
            });
        }

        serde_json::from_str::<T>(&response.body).map_err(|e| TransportError::Parse(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, TransportError> {
        self.request(Method::Get, endpoint, query, None, Vec::new()).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let body = json_body(body)?;
        self.request(Method::Post, endpoint, Vec::new(), Some(body), Vec::new()).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: MultipartForm,
    ) -> Result<T, TransportError> {
        self.request(
            Method::Post,
            endpoint,
            Vec::new(),
            Some(RequestBody::Multipart(form)),
            Vec::new(),
        )
        .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, TransportError> {
        let body = json_body(body)?;
        self.request(Method::Put, endpoint, Vec::new(), Some(body), Vec::new()).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, TransportError> {
        self.request(Method::Delete, endpoint, Vec::new(), None, Vec::new()).await
    }
}

/// `responseMsg` when the error body is an envelope, else the raw body or status text
fn error_message(response: HttpResponse) -> String {
    let envelope_msg = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|v| v.get("responseMsg").and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.trim().is_empty());
    match envelope_msg {
        Some(message) => message,
        None if response.body.trim().is_empty() => response.status_text,
        None => response.body,
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, TransportError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| TransportError::Build(format!("Serialization error: {}", e)))
}
