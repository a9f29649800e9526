pub mod api_client;
pub mod credentials;
pub mod auth_service;
pub mod lookup_service;
pub mod property_service;

#[cfg(not(target_arch = "wasm32"))]
pub mod http_transport;
#[cfg(target_arch = "wasm32")]
pub mod fetch_transport;

pub use api_client::{ApiClient, HttpRequest, HttpResponse, Method, MultipartForm, RequestBody, Transport};
pub use credentials::{CredentialProvider, StaticCredentials, StoredCredentials};
pub use auth_service::AuthService;
pub use lookup_service::LookupService;
pub use property_service::PropertyService;

#[cfg(not(target_arch = "wasm32"))]
pub use http_transport::HttpTransport;
#[cfg(target_arch = "wasm32")]
pub use fetch_transport::FetchTransport;
