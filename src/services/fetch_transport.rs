//! Browser transport over `gloo-net` (fetch API).

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::error::TransportError;
use crate::services::api_client::{HttpRequest, HttpResponse, Method, MultipartForm, RequestBody, Transport};

#[derive(Clone, Copy, Default, Debug)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    fn builder(request: &HttpRequest) -> RequestBuilder {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));
        if request.query.is_empty() {
            builder
        } else {
            builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        }
    }
}

fn form_data(form: &MultipartForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value)?;
    }
    if let Some(file) = &form.file {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&file.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = Self::builder(&request);

        // Multipart bodies let the browser set the boundary header itself
        let built = match &request.body {
            Some(RequestBody::Json(value)) => builder
                .json(value)
                .map_err(|e| TransportError::Build(format!("Serialization error: {}", e)))?,
            Some(RequestBody::Multipart(form)) => {
                let data = form_data(form)
                    .map_err(|e| TransportError::Build(format!("{:?}", e)))?;
                builder
                    .body(data)
                    .map_err(|e| TransportError::Build(e.to_string()))?
            }
            None => builder
                .build()
                .map_err(|e| TransportError::Build(e.to_string()))?,
        };

        let response = built
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
