//! Infrastructure: sockets and framing.
//!
//! Concrete network plumbing behind the session: LAN discovery, the
//! single-connection [`Connector`], the [`Receiver`] loop feeding the
//! scheduler, the outbound [`Proxy`] and the newline [`MessageSplitter`].

pub mod connector;
pub mod discovery;
pub mod framing;
pub mod proxy;
pub mod receiver;

pub use connector::Connector;
pub use discovery::ServerDiscovery;
pub use framing::MessageSplitter;
pub use proxy::Proxy;
pub use receiver::Receiver;
