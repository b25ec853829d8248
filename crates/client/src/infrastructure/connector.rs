//! Connection lifecycle management.
//!
//! The [`Connector`] owns at most one stream connection at a time. On
//! connect it splits the socket, hands the read half to a [`Receiver`] task
//! feeding the scheduler, and returns a [`Proxy`] for the write half.
//! Disconnect signals the receiver, drops the read half to unblock any
//! pending read, and is safe to call at any time - including after the
//! loop already ended on its own.

use std::net::IpAddr;
use std::sync::Arc;

use tokio::net::TcpStream;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

use crate::application::Thruster;
use crate::config::ClientConfig;
use crate::error::ConnectionError;
use crate::infrastructure::proxy::Proxy;
use crate::infrastructure::receiver::Receiver;

struct ActiveSession {
    proxy: Proxy,
    shutdown_tx: Option<oneshot::Sender<()>>,
    receiver_task: JoinHandle<()>,
}

/// Opens and tears down the single stream connection to a game server.
pub struct Connector {
    config: ClientConfig,
    thruster: Arc<Thruster>,
    active: Mutex<Option<ActiveSession>>,
}

impl Connector {
    pub fn new(config: ClientConfig, thruster: Arc<Thruster>) -> Self {
        Self {
            config,
            thruster,
            active: Mutex::new(None),
        }
    }

    /// Connects to a discovered server and starts the receive loop.
    /// Rejected with [`ConnectionError::AlreadyConnected`] while a session
    /// is active.
    pub async fn connect(&self, address: IpAddr) -> Result<Proxy, ConnectionError> {
        let mut active = self.active.lock().await;
        if active.is_some() {
            return Err(ConnectionError::AlreadyConnected);
        }

        let stream = TcpStream::connect((address, self.config.data_port)).await?;
        tracing::info!("connected to {}:{}", address, self.config.data_port);

        let (read_half, write_half) = stream.into_split();
        let proxy = Proxy::new(write_half);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let receiver = Receiver::new(read_half, Arc::clone(&self.thruster));
        let receiver_task = tokio::spawn(receiver.run(shutdown_rx));

        *active = Some(ActiveSession {
            proxy: proxy.clone(),
            shutdown_tx: Some(shutdown_tx),
            receiver_task,
        });

        Ok(proxy)
    }

    /// The proxy of the active session, if any.
    pub async fn proxy(&self) -> Option<Proxy> {
        self.active.lock().await.as_ref().map(|s| s.proxy.clone())
    }

    /// Whether a session is currently active.
    pub async fn is_connected(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Ends the active session: signals the receive loop, waits for it to
    /// finish and releases the connection. A no-op without one.
    pub async fn disconnect(&self) {
        let session = self.active.lock().await.take();

        if let Some(mut session) = session {
            if let Some(shutdown_tx) = session.shutdown_tx.take() {
                // The loop may have already exited on its own.
                let _ = shutdown_tx.send(());
            }
            if let Err(e) = session.receiver_task.await {
                tracing::warn!("receiver task ended abnormally: {}", e);
            }
            tracing::info!("disconnected");
        }
    }
}
