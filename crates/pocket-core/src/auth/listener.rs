use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::constants::{CALLBACK_BIND_ADDR, CALLBACK_CONFIRMATION, FAVICON_PATH};
use crate::error::{PocketError, Result};

#[derive(Clone)]
struct CallbackState {
    signal: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

/// Loopback HTTP server used as the redirect target of the authorization page.
///
/// The first request that is not a favicon fetch completes the wait; the
/// server is shut down as soon as [`CallbackListener::wait`] returns.
pub struct CallbackListener {
    addr: SocketAddr,
    completed: oneshot::Receiver<()>,
    shutdown: oneshot::Sender<()>,
    server: JoinHandle<std::io::Result<()>>,
}

impl CallbackListener {
    pub async fn bind() -> Result<Self> {
        Self::bind_to(CALLBACK_BIND_ADDR).await
    }

    pub async fn bind_to(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(PocketError::Listener)?;
        let addr = listener.local_addr().map_err(PocketError::Listener)?;

        let (completed_tx, completed) = oneshot::channel();
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let state = CallbackState {
            signal: Arc::new(Mutex::new(Some(completed_tx))),
        };
        let app = Router::new().fallback(handle_callback).with_state(state);

        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });
        debug!(%addr, "callback listener started");

        Ok(Self {
            addr,
            completed,
            shutdown,
            server,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Value to register as `redirect_uri`; has no trailing slash.
    pub fn redirect_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Suspends until the callback arrives, `timeout` elapses, or the server dies.
    /// The listener is torn down in every case.
    pub async fn wait(self, timeout: Option<Duration>) -> Result<()> {
        let Self {
            addr,
            completed,
            shutdown,
            server,
        } = self;

        let outcome = match timeout {
            Some(limit) => match tokio::time::timeout(limit, completed).await {
                Ok(received) => received.map_err(|_| PocketError::CallbackClosed),
                Err(_) => Err(PocketError::CallbackTimeout(limit)),
            },
            None => completed.await.map_err(|_| PocketError::CallbackClosed),
        };

        let _ = shutdown.send(());
        match server.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(%addr, error = %err, "callback listener exited with error"),
            Err(err) => warn!(%addr, error = %err, "callback listener task failed"),
        }
        debug!(%addr, "callback listener stopped");
        outcome
    }
}

async fn handle_callback(State(state): State<CallbackState>, uri: Uri) -> Response {
    if uri.path() == FAVICON_PATH {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    let sender = match state.signal.lock() {
        Ok(mut guard) => guard.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    match sender {
        Some(sender) => {
            debug!(path = %uri.path(), "authorization callback received");
            let _ = sender.send(());
        }
        None => debug!(path = %uri.path(), "ignoring repeated authorization callback"),
    }

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        CALLBACK_CONFIRMATION,
    )
        .into_response()
}
