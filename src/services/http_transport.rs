//! Native transport over `reqwest`, for non-browser builds.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::error::TransportError;
use crate::services::api_client::{HttpRequest, HttpResponse, Method, RequestBody, Transport};

#[derive(Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(form)) => {
                let mut multipart = Form::new();
                for (name, value) in form.fields {
                    multipart = multipart.text(name, value);
                }
                if let Some(file) = form.file {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)
                        .map_err(|e| TransportError::Build(e.to_string()))?;
                    multipart = multipart.part(file.field, part);
                }
                builder.multipart(multipart)
            }
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
