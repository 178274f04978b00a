//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{HeaderMap, Request, Response, StatusCode};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use query_header_mapper::{AppConfig, HttpServer};

/// Records what the next stage saw and how often it ran.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Option<(String, HeaderMap)>>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn record<B>(&self, req: &Request<B>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some((req.method().to_string(), req.headers().clone()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn headers(&self) -> HeaderMap {
        self.seen.lock().unwrap().clone().expect("next stage never ran").1
    }

    pub fn method(&self) -> String {
        self.seen.lock().unwrap().clone().expect("next stage never ran").0
    }
}

/// An inner service that records the request and answers 200.
#[allow(dead_code)]
pub fn recording_service(
    recorder: Recorder,
) -> impl tower::Service<
    Request<Body>,
    Response = Response<Body>,
    Error = std::convert::Infallible,
> + Clone {
    tower::service_fn(move |req: Request<Body>| {
        let recorder = recorder.clone();
        async move {
            recorder.record(&req);
            let body = axum::body::to_bytes(req.into_body(), usize::MAX)
                .await
                .unwrap_or_default();
            Ok::<_, std::convert::Infallible>(
                Response::builder()
                    .status(StatusCode::OK)
                    .body(Body::from(body))
                    .unwrap(),
            )
        }
    })
}

/// Start the echo server on an ephemeral port.
///
/// Dropping the returned sender shuts the server down.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> (SocketAddr, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server
            .run_until(listener, async {
                let _ = rx.await;
            })
            .await;
    });

    (addr, tx)
}
