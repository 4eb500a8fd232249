//! In-process stand-in for the SIMPADU backend.
//!
//! Every request is recorded, then answered by a test-supplied closure.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;

use simpadu::storage::MemoryStore;
use simpadu::{AppContext, Config, Environment};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
    pub raw_len: usize,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Option<String>,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: Value) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
            delay: Duration::ZERO,
        }
    }

    /// Body sent byte for byte.
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: None,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&RecordedRequest, usize) -> Reply + Send + Sync;

struct State {
    requests: Mutex<Vec<RecordedRequest>>,
    counter: AtomicUsize,
    responder: Box<Responder>,
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<State>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        raw_len: body.len(),
    };
    let index = state.counter.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(recorded.clone());

    let reply = (state.responder)(&recorded, index);
    if !reply.delay.is_zero() {
        actix_web::rt::time::sleep(reply.delay).await;
    }

    let mut response = HttpResponse::build(StatusCode::from_u16(reply.status).unwrap());
    match reply.body {
        Some(body) => response.content_type("application/json").body(body),
        None => response.finish(),
    }
}

pub struct MockBackend {
    pub base_url: String,
    state: web::Data<State>,
}

impl MockBackend {
    /// Starts the backend on an ephemeral port. `responder` gets each request
    /// and its zero-based arrival index.
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest, usize) -> Reply + Send + Sync + 'static,
    {
        let state = web::Data::new(State {
            requests: Mutex::new(Vec::new()),
            counter: AtomicUsize::new(0),
            responder: Box::new(responder),
        });
        let data = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

pub fn config(base_url: &str) -> Config {
    Config {
        environment: Environment::Dev,
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
        session_file: PathBuf::from("unused-session.json"),
        log_dir: PathBuf::from("logs"),
    }
}

/// App context against `backend` with an in-memory session store.
pub fn context(backend: &MockBackend) -> (Arc<MemoryStore>, AppContext) {
    let store = Arc::new(MemoryStore::new());
    let ctx = AppContext::new(config(&backend.base_url), store.clone()).unwrap();
    (store, ctx)
}
