//! Shared fixtures: a scripted in-memory catalog transport.

#![allow(dead_code)]

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tv_browser::core::NavigationStore;
use tv_browser::services::{CatalogClient, FetchResult, Transport};
use tv_browser::FetchFailure;

pub const BASE_URL: &str = "https://catalog.test";

pub fn shows_url() -> String {
    format!("{}/shows", BASE_URL)
}

pub fn episodes_url(show_id: u64) -> String {
    format!("{}/shows/{}/episodes", BASE_URL, show_id)
}

enum Route {
    Ready(FetchResult<Value>),
    Gated(oneshot::Receiver<FetchResult<Value>>),
}

/// Transport that answers from a routing table and counts requests per URL.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `url` immediately with `body`.
    pub fn respond(&self, url: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Ready(Ok(body)));
    }

    /// Answer `url` immediately with `failure`.
    pub fn fail(&self, url: &str, failure: FetchFailure) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Ready(Err(failure)));
    }

    /// Hold the answer for `url` until the returned sender fires.
    pub fn gate(&self, url: &str) -> oneshot::Sender<FetchResult<Value>> {
        let (tx, rx) = oneshot::channel();
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Gated(rx));
        tx
    }

    /// Number of requests issued for `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl Transport for MockTransport {
    fn get_json(&self, url: &str) -> BoxFuture<'static, FetchResult<Value>> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;

        let mut routes = self.routes.lock().unwrap();
        match routes.remove(url) {
            Some(Route::Ready(result)) => {
                routes.insert(url.to_string(), Route::Ready(result.clone()));
                async move { result }.boxed()
            }
            Some(Route::Gated(rx)) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchFailure::Transport("gate dropped".to_string())))
            }
            .boxed(),
            None => async {
                Err(FetchFailure::Status {
                    status: 404,
                    reason: "Not Found".to_string(),
                })
            }
            .boxed(),
        }
    }
}

pub fn client(transport: &Arc<MockTransport>) -> Arc<CatalogClient> {
    Arc::new(CatalogClient::new(transport.clone(), BASE_URL))
}

pub fn store(transport: &Arc<MockTransport>) -> NavigationStore {
    NavigationStore::new(client(transport))
}

pub fn show_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "summary": format!("<p><b>{}</b> is a show.</p>", name),
        "genres": ["Drama"],
        "status": "Ended",
        "rating": { "average": 8.0 },
        "runtime": 30,
        "image": null
    })
}

pub fn episode_json(season: u32, number: u32, name: &str) -> Value {
    json!({
        "id": season * 100 + number,
        "name": name,
        "season": season,
        "number": number,
        "summary": format!("<p>{} summary.</p>", name),
        "image": { "medium": "https://img.test/m.jpg" },
        "url": format!("https://catalog.test/episodes/{}", season * 100 + number)
    })
}

/// Catalog with Archer (1) and Breaking Bad (2), delivered out of order.
pub fn seed_shows(transport: &MockTransport) {
    transport.respond(
        &shows_url(),
        json!([show_json(2, "Breaking Bad"), show_json(1, "Archer")]),
    );
}

pub fn seed_episodes(transport: &MockTransport, show_id: u64, episodes: Vec<Value>) {
    transport.respond(&episodes_url(show_id), Value::Array(episodes));
}
