use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use feed_server::render::fmt_live;
use feed_server::store::{BASE_PRICE_RANGE, STEP_SCALE_RANGE, UNIT_STEP_RANGE};
use feed_server::{TickerStore, router};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tower::ServiceExt;

struct Reply {
    status: StatusCode,
    content_type: Option<String>,
    body: Value,
}

async fn request(app: &Router, method: Method, uri: &str) -> Reply {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    Reply {
        status,
        content_type,
        body: serde_json::from_slice(&bytes).unwrap(),
    }
}

async fn get(app: &Router, uri: &str) -> Reply {
    request(app, Method::GET, uri).await
}

fn price(body: &Value) -> &Value {
    &body["quoteSummary"]["result"][0]["price"]
}

fn live(body: &Value, key: &str) -> f64 {
    price(body)[key]["raw"].as_f64().unwrap()
}

/// A live value as served: rounded to six decimals.
fn served(value: f64) -> f64 {
    fmt_live(value).parse().unwrap()
}

fn assert_served(actual: f64, expected: f64) {
    assert_eq!(actual, served(expected), "unrounded value {}", expected);
}

#[tokio::test]
async fn serves_quote_for_path_symbol() {
    let app = router(Arc::new(TickerStore::seeded(1)));

    let reply = get(&app, "/AAA").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type.is_none());
    assert_eq!(price(&reply.body)["symbol"], "AAA");

    let quote = live(&reply.body, "regularMarketPrice");
    assert!((299.5..1899.5).contains(&quote));
    let shown: f64 = price(&reply.body)["regularMarketPrice"]["fmt"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(quote, shown);
}

#[tokio::test]
async fn second_request_continues_the_walk() {
    let seed = 2024;
    let store = Arc::new(TickerStore::seeded(seed));
    let app = router(Arc::clone(&store));
    let mut replay = StdRng::seed_from_u64(seed);

    let first = get(&app, "/AAA").await;
    let base = replay.random_range(BASE_PRICE_RANGE) as f64;
    let first_drift: f64 = replay.random_range(UNIT_STEP_RANGE);
    assert_served(live(&first.body, "regularMarketChange"), first_drift);
    assert_served(live(&first.body, "regularMarketPrice"), base + first_drift);

    let second = get(&app, "/AAA").await;
    let scale = replay.random_range(STEP_SCALE_RANGE) as f64;
    let second_delta = replay.random_range(UNIT_STEP_RANGE) * scale;
    let drift = first_drift + second_delta;
    assert_served(live(&second.body, "regularMarketChange"), drift);
    assert_served(live(&second.body, "regularMarketPrice"), base + drift);
    assert_ne!(
        live(&first.body, "regularMarketPrice"),
        live(&second.body, "regularMarketPrice")
    );

    assert_eq!(store.snapshot("AAA").unwrap().base_price, base);
}

#[tokio::test]
async fn root_path_is_the_empty_symbol() {
    let store = Arc::new(TickerStore::seeded(3));
    let app = router(Arc::clone(&store));

    let first = get(&app, "/").await;
    let second = get(&app, "/").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(price(&first.body)["symbol"], "");
    assert_eq!(price(&second.body)["symbol"], "");
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot("").unwrap().ticks, 1);
}

#[tokio::test]
async fn query_string_does_not_change_the_ticker() {
    let store = Arc::new(TickerStore::seeded(4));
    let app = router(Arc::clone(&store));

    get(&app, "/GOOG").await;
    let reply = get(&app, "/GOOG?modules=summaryDetail,price").await;
    assert_eq!(price(&reply.body)["symbol"], "GOOG");
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot("GOOG").unwrap().ticks, 1);
}

#[tokio::test]
async fn nested_paths_and_other_methods_are_accepted() {
    let store = Arc::new(TickerStore::seeded(5));
    let app = router(Arc::clone(&store));

    let nested = get(&app, "/v11/finance/quoteSummary/GOOG").await;
    assert_eq!(price(&nested.body)["symbol"], "v11/finance/quoteSummary/GOOG");

    let posted = request(&app, Method::POST, "/GOOG").await;
    assert_eq!(posted.status, StatusCode::OK);
    assert_eq!(price(&posted.body)["symbol"], "GOOG");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn tickers_evolve_independently() {
    let store = Arc::new(TickerStore::seeded(6));
    let app = router(Arc::clone(&store));

    get(&app, "/AAA").await;
    let bbb = get(&app, "/BBB").await;
    for _ in 0..10 {
        get(&app, "/AAA").await;
    }
    let bbb_state = store.snapshot("BBB").unwrap();
    assert_eq!(bbb_state.ticks, 0);
    assert_served(live(&bbb.body, "regularMarketPrice"), bbb_state.price());
    assert_eq!(store.snapshot("AAA").unwrap().ticks, 10);
}

#[tokio::test]
async fn encoded_path_is_its_own_ticker() {
    let store = Arc::new(TickerStore::seeded(8));
    let app = router(Arc::clone(&store));

    let encoded = get(&app, "/BRK%2EB").await;
    let plain = get(&app, "/BRK.B").await;
    assert_eq!(price(&encoded.body)["symbol"], "BRK%2EB");
    assert_eq!(price(&plain.body)["symbol"], "BRK.B");
    assert_eq!(store.len(), 2);
    assert_eq!(store.snapshot("BRK%2EB").unwrap().ticks, 0);
    assert_eq!(store.snapshot("BRK.B").unwrap().ticks, 0);
}
