//! HTTP front of the mock feed.
//!
//! Every request, whatever its method or path, lands in one handler. The request
//! path minus its leading `/` is the ticker symbol, taken verbatim (no percent
//! decoding); the query string is ignored. `/` is the empty symbol `""`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use feed_common::Result;
use log::error;
use tokio::net::TcpListener;

use crate::render::render;
use crate::store::TickerStore;

/// Store handle shared by all request handlers.
pub type SharedStore = Arc<TickerStore>;

/// Map a request path to the ticker symbol it names.
pub fn symbol_from_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Router answering every request with a quote for the requested path.
pub fn router(store: SharedStore) -> Router {
    Router::new().fallback(quote_handler).with_state(store)
}

/// Serve the router on an already bound listener until the listener fails.
pub async fn serve(listener: TcpListener, store: SharedStore) -> Result<()> {
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn quote_handler(State(store): State<SharedStore>, uri: Uri) -> Response {
    let symbol = symbol_from_path(uri.path());
    let resolution = store.resolve(symbol);

    match render(symbol, resolution.drift, resolution.price) {
        // Body without a content type, as the vendor mock always did.
        Ok(json) => Response::new(Body::from(json)),
        Err(e) => {
            error!("Failed to render quote for {:?}: {}", symbol, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_drops_only_the_leading_slash() {
        assert_eq!(symbol_from_path("/AAA"), "AAA");
        assert_eq!(symbol_from_path("/"), "");
        assert_eq!(symbol_from_path("//x/y"), "/x/y");
        assert_eq!(symbol_from_path("/BRK%2EB"), "BRK%2EB");
    }
}
