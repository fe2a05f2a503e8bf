//! Mock cat feed server.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Clone)]
struct MockState {
    status: u16,
    body: Arc<String>,
    delay_ms: u64,
    hits: Arc<AtomicUsize>,
}

/// Serves one canned response on every path.
pub struct MockFeed {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockFeed {
    pub async fn json(body: &str) -> Self {
        Self::start(200, body, 0).await
    }

    pub async fn error(status: u16) -> Self {
        Self::start(status, r#"{"error": "boom"}"#, 0).await
    }

    pub async fn start(status: u16, body: &str, delay_ms: u64) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            status,
            body: Arc::new(body.to_string()),
            delay_ms,
            hits: Arc::clone(&hits),
        };

        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock feed");
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            hits,
            shutdown: Some(tx),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/cat-api/cats.json", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockFeed {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn respond(State(state): State<MockState>) -> Response<Body> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.delay_ms)).await;
    }
    Response::builder()
        .status(StatusCode::from_u16(state.status).unwrap_or(StatusCode::OK))
        .header("content-type", "application/json")
        .body(Body::from(state.body.as_str().to_owned()))
        .unwrap()
}
