//! In-process stand-in for the Renewables.ninja API, used by the test suites.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub uri: String,
    pub authorization: Option<String>,
}

pub(crate) struct MockState {
    body: Vec<u8>,
    status: StatusCode,
    fail_on: Option<usize>,
    hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub(crate) struct MockApi {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockApi {
    /// Answers every request with `200` and `body`.
    pub async fn serving(body: &str) -> MockApi {
        Self::start(body.as_bytes(), StatusCode::OK, None).await
    }

    /// Answers every request with `200` and the raw `body` bytes.
    pub async fn serving_bytes(body: &[u8]) -> MockApi {
        Self::start(body, StatusCode::OK, None).await
    }

    /// Answers every request with `status`.
    pub async fn with_status(status: StatusCode) -> MockApi {
        Self::start(b"", status, None).await
    }

    /// Serves `body` but fails the `nth` request (1-based) with a 500.
    pub async fn failing_on(body: &str, nth: usize) -> MockApi {
        Self::start(body.as_bytes(), StatusCode::OK, Some(nth)).await
    }

    async fn start(body: &[u8], status: StatusCode, fail_on: Option<usize>) -> MockApi {
        let state = Arc::new(MockState {
            body: body.to_vec(),
            status,
            fail_on,
            hits: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/api/data/wind", get(simulate))
            .route("/api/data/pv", get(simulate))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        MockApi {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }
}

async fn simulate(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    uri: Uri,
) -> (StatusCode, Vec<u8>) {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst) + 1;
    state.requests.lock().unwrap().push(RecordedRequest {
        uri: uri.to_string(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    if state.fail_on == Some(hit) {
        return (StatusCode::INTERNAL_SERVER_ERROR, b"simulation failed".to_vec());
    }
    (state.status, state.body.clone())
}
