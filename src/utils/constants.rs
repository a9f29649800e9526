/// Base URL of the estate backend.
/// Set at compile time through `BACKEND_URL` (see build.rs), defaults to the local dev server.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:7000",
};

/// Session storage key holding the persisted `{token, user}` record
pub const SESSION_STORAGE_KEY: &str = "authContextData";

/// Envelope `responseCode` that marks a successful call
pub const SUCCESS_CODE: &str = "00";

/// Page size used when a paginated fetch omits `limit`
pub const DEFAULT_PAGE_LIMIT: u32 = 3;

/// Pages shown on each side of the current page in the pagination window
pub const PAGE_WINDOW_RADIUS: u32 = 2;
