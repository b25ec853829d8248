//! LAN server discovery.
//!
//! One-shot: send a [`HelloMessage`] datagram to the broadcast address of
//! every usable interface, then collect replies for the configured window.
//! Any reply counts as a discovered server; the payload is logged but not
//! validated.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use tokio::net::UdpSocket;

use meridian_protocol::HelloMessage;

use crate::config::ClientConfig;
use crate::error::ConnectionError;

const RESPONSE_BUFFER_SIZE: usize = 1024;

/// Finds game servers on the local network via a broadcast handshake.
pub struct ServerDiscovery {
    config: ClientConfig,
}

impl ServerDiscovery {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Broadcasts the hello datagram and returns the addresses that replied
    /// within the discovery window, in arrival order, without duplicates.
    pub async fn list_servers(&self) -> Result<Vec<IpAddr>, ConnectionError> {
        tracing::info!("searching for servers");

        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
        socket.set_broadcast(true)?;

        let payload = serde_json::to_vec(&HelloMessage::new())?;
        for target in broadcast_targets() {
            tracing::info!("broadcasting on {}", target);
            let destination = SocketAddr::from((target, self.config.broadcast_port));
            if let Err(e) = socket.send_to(&payload, destination).await {
                tracing::warn!("broadcast to {} failed: {}", destination, e);
            }
        }

        let servers = gather_responses(&socket, self.config.discovery_timeout()).await?;
        tracing::info!("{} servers found", servers.len());
        Ok(servers)
    }
}

/// Broadcast addresses of every usable interface: up, not loopback, IPv4
/// with a broadcast address. Falls back to the limited broadcast address
/// when enumeration yields nothing.
fn broadcast_targets() -> Vec<Ipv4Addr> {
    let mut targets = Vec::new();

    match if_addrs::get_if_addrs() {
        Ok(interfaces) => {
            for interface in interfaces {
                if interface.is_loopback() {
                    continue;
                }
                if let if_addrs::IfAddr::V4(v4) = &interface.addr {
                    if let Some(broadcast) = v4.broadcast {
                        targets.push(broadcast);
                    }
                }
            }
        }
        Err(e) => tracing::warn!("interface enumeration failed: {}", e),
    }

    if targets.is_empty() {
        targets.push(Ipv4Addr::BROADCAST);
    }

    targets
}

/// Collects reply datagrams until `window` elapses. Every distinct sender
/// counts as one server, whatever it replied.
async fn gather_responses(
    socket: &UdpSocket,
    window: Duration,
) -> Result<Vec<IpAddr>, ConnectionError> {
    let deadline = Instant::now() + window;
    let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
    let mut servers: Vec<IpAddr> = Vec::new();

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }

        match tokio::time::timeout(remaining, socket.recv_from(&mut buffer)).await {
            Ok(Ok((length, source))) => {
                let response = String::from_utf8_lossy(&buffer[..length]);
                tracing::info!("response from {}: {:?}", source, response.as_ref());
                if !servers.contains(&source.ip()) {
                    servers.push(source.ip());
                }
            }
            Ok(Err(e)) => return Err(e.into()),
            // Window elapsed with no further replies.
            Err(_) => break,
        }
    }

    Ok(servers)
}
