//! Lifecycle of the HTTP listener.
//!
//! A [`Server`] moves through `Created → Running → ShuttingDown → Stopped`.
//! [`Server::start`] binds the socket and hands the accept loop to a spawned
//! task, so the caller is free to wait on [`shutdown_signal`]. [`Server::shutdown`]
//! stops accepting connections and gives in-flight requests a bounded grace
//! period to finish before the accept loop is abandoned.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use log::*;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    ShuttingDown,
    Stopped,
}

pub struct Server {
    addr: String,
    router: Router,
    state: Arc<watch::Sender<LifecycleState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    serve_task: Option<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
}

impl Server {
    pub fn new(addr: impl Into<String>, router: Router) -> Self {
        let (state, _) = watch::channel(LifecycleState::Created);
        Self {
            addr: addr.into(),
            router,
            state: Arc::new(state),
            shutdown_tx: None,
            serve_task: None,
            local_addr: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.borrow()
    }

    /// Returns a receiver that observes every lifecycle transition.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// The address actually bound, once started. Differs from the configured
    /// address when binding to port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Binds the listener and starts serving on a background task.
    ///
    /// Returns as soon as the socket is bound. A bind failure is returned for
    /// the caller to report, and leaves the server `Stopped`. Errors raised later by the
    /// accept loop are logged on the background task only.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        if self.state() != LifecycleState::Created {
            return Err(Error::already_started());
        }

        let bound = match TcpListener::bind(&self.addr).await {
            Ok(listener) => listener.local_addr().map(|addr| (listener, addr)),
            Err(e) => Err(e),
        };
        let (listener, local_addr) = match bound {
            Ok(bound) => bound,
            Err(e) => {
                self.state.send_replace(LifecycleState::Stopped);
                return Err(Error::bind(e));
            }
        };

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let router = self.router.clone();
        let state = Arc::clone(&self.state);

        self.state.send_replace(LifecycleState::Running);
        info!("Server starting... listening for connections on http://{local_addr}");

        self.serve_task = Some(tokio::spawn(async move {
            // A dropped sender also counts as a shutdown request.
            let signal = async move {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(signal)
                .await
            {
                error!("{}", Error::serve(e));
            }
            state.send_replace(LifecycleState::Stopped);
        }));
        self.shutdown_tx = Some(shutdown_tx);
        self.local_addr = Some(local_addr);

        Ok(local_addr)
    }

    /// Stops accepting new connections and waits up to `grace_period` for
    /// in-flight requests to complete.
    ///
    /// Always returns once the grace period has elapsed; any request still
    /// running at that point is abandoned. Nothing here is escalated beyond
    /// a log line.
    pub async fn shutdown(&mut self, grace_period: Duration) {
        let Some(mut serve_task) = self.serve_task.take() else {
            self.state.send_replace(LifecycleState::Stopped);
            return;
        };

        self.state.send_replace(LifecycleState::ShuttingDown);
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        match timeout(grace_period, &mut serve_task).await {
            Ok(Ok(())) => info!("All connections drained"),
            Ok(Err(e)) => error!("Server Shutdown: {e}"),
            Err(_) => {
                warn!(
                    "Server Shutdown: connections still open after {grace_period:?}, closing anyway"
                );
                serve_task.abort();
            }
        }

        self.state.send_replace(LifecycleState::Stopped);
    }
}

/// Resolves when the process receives SIGINT (Ctrl-C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
