use arc_conformance_domain::{DomainError, TxtRecordSet};
use async_trait::async_trait;
use std::net::SocketAddr;

/// A running stub DNS server scoped to one test case.
///
/// `release` stops the server and returns once the port is free again.
/// Implementations must also stop serving when the handle is dropped without
/// being released, so a panicking or cancelled case cannot leak its records
/// into the next one.
#[async_trait]
pub trait StubResolverHandle: Send {
    fn local_addr(&self) -> SocketAddr;

    async fn release(self: Box<Self>);
}

#[async_trait]
pub trait StubResolverPort: Send + Sync {
    /// Starts a server answering TXT queries for exactly `records` on `port`.
    /// Port 0 lets the OS pick one; see [`StubResolverHandle::local_addr`].
    async fn acquire(
        &self,
        records: &TxtRecordSet,
        port: u16,
    ) -> Result<Box<dyn StubResolverHandle>, DomainError>;
}
