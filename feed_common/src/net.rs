//! Shared networking constants and helpers used by client and server.

/// TCP port the mock feed listens on for HTTP.
pub const HTTP_PORT: u16 = 8080;
/// Interface the server binds to unless told otherwise.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Where the client looks for the feed unless told otherwise.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
/// Query string real quote-summary endpoints expect; the mock ignores it.
pub const SUMMARY_MODULES_QUERY: &str = "modules=summaryDetail,price";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Build the quote URL for `ticker` under `base_url` (e.g. `http://127.0.0.1:8080`).
///
/// A trailing slash on `base_url` is tolerated.
pub fn quote_url(base_url: &str, ticker: &str) -> String {
    format!(
        "{}/{}?{}",
        base_url.trim_end_matches('/'),
        ticker,
        SUMMARY_MODULES_QUERY
    )
}
