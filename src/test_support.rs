//! Scripted transport shared by the store tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::TransportError;
use crate::services::api_client::{HttpRequest, HttpResponse, Method, Transport};

pub const BASE_URL: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

/// Replies are queued per `(method, endpoint)`; the last reply of a queue is
/// reused once the others are consumed. Unscripted calls fail with HTTP 404.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, method: Method, endpoint: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn reply_json(&self, method: Method, endpoint: &str, body: Value) {
        self.reply_raw(method, endpoint, 200, &body.to_string());
    }

    /// Success envelope around `content`
    pub fn reply_ok(&self, method: Method, endpoint: &str, content: Value) {
        self.reply_json(method, endpoint, envelope("00", "Success", content));
    }

    pub fn reply_code(&self, method: Method, endpoint: &str, code: &str, message: &str) {
        self.reply_json(method, endpoint, envelope(code, message, Value::Null));
    }

    pub fn reply_raw(&self, method: Method, endpoint: &str, status: u16, body: &str) {
        self.reply(
            method,
            endpoint,
            Ok(HttpResponse {
                status,
                status_text: reason(status).to_string(),
                body: body.to_string(),
            }),
        );
    }

    pub fn reply_status(&self, method: Method, endpoint: &str, status: u16, body: &str) {
        self.reply_raw(method, endpoint, status, body);
    }

    pub fn fail(&self, method: Method, endpoint: &str, message: &str) {
        self.reply(method, endpoint, Err(TransportError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

pub fn envelope(code: &str, message: &str, content: Value) -> Value {
    json!({
        "responseCode": code,
        "responseMsg": message,
        "content": content,
        "exception": null
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "",
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let endpoint = request
            .url
            .strip_prefix(BASE_URL)
            .or_else(|| request.url.split_once("://").and_then(|(_, rest)| rest.find('/').map(|i| &rest[i..])))
            .unwrap_or(&request.url)
            .to_string();
        let key = (request.method, endpoint);
        self.requests.borrow_mut().push(request);

        let mut replies = self.replies.borrow_mut();
        match replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> Reply {
    Ok(HttpResponse {
        status: 404,
        status_text: "Not Found".to_string(),
        body: String::new(),
    })
}

pub fn property_json(id: i64, title: &str) -> Value {
    json!({
        "propertyId": id,
        "propertyTitle": title,
        "propertySlug": crate::models::slugify(title),
        "propertyLocation": {"locationId": 1, "locationDescription": "Colombo"},
        "propertyDescription": "",
        "propertyPrice": 100000 + id,
        "propertyType": {"typeId": 1, "typeDescription": "House"},
        "propertyStatus": {"statusId": 1, "statusDescription": "For Sale"},
        "propertyArea": 1200,
        "propertyImagePath": "",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    })
}

pub fn page_json(ids: &[i64], current: u32, total_pages: u32, per_page: u32) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| property_json(*id, &format!("Listing {}", id))).collect();
    json!({
        "data": data,
        "pagination": {
            "currentPage": current,
            "totalPages": total_pages,
            "totalItems": total_pages * per_page,
            "itemsPerPage": per_page,
            "hasNextPage": current < total_pages,
            "hasPreviousPage": current > 1
        }
    })
}
