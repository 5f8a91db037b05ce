use super::txt_responder::TxtRequestHandler;
use arc_conformance_application::ports::{StubResolverHandle, StubResolverPort};
use arc_conformance_domain::{DomainError, TxtRecordSet};
use async_trait::async_trait;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::{debug, info, warn};

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// Stub resolver adapter: one fresh [`StubDnsServer`] per acquisition, bound
/// on loopback.
pub struct HickoryStubResolver;

impl HickoryStubResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HickoryStubResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StubResolverPort for HickoryStubResolver {
    async fn acquire(
        &self,
        records: &TxtRecordSet,
        port: u16,
    ) -> Result<Box<dyn StubResolverHandle>, DomainError> {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
        let server = StubDnsServer::start(addr, records.clone()).await?;
        Ok(Box::new(server))
    }
}

/// DNS server answering from a fixed [`TxtRecordSet`] over UDP and TCP on
/// one port until released or dropped.
pub struct StubDnsServer {
    local_addr: SocketAddr,
    server: Option<ServerFuture<TxtRequestHandler>>,
}

impl StubDnsServer {
    pub async fn start(addr: SocketAddr, records: TxtRecordSet) -> Result<Self, DomainError> {
        let bind_error = |e: io::Error| DomainError::DnsBind {
            port: addr.port(),
            reason: e.to_string(),
        };

        let udp_socket = UdpSocket::bind(addr).await.map_err(bind_error)?;
        let local_addr = udp_socket.local_addr().map_err(bind_error)?;
        // Same port as UDP, even when the caller asked for an ephemeral one.
        let tcp_listener = create_tcp_listener(local_addr).map_err(bind_error)?;

        for (name, content) in records.iter() {
            debug!(name, bytes = content.len(), "Serving TXT record");
        }
        let record_count = records.len();

        let handler = TxtRequestHandler::new(Arc::new(records));
        let mut server = ServerFuture::new(handler);
        server.register_socket(udp_socket);
        server.register_listener(tcp_listener, TCP_TIMEOUT);

        info!(
            bind_address = %local_addr,
            records = record_count,
            "Stub DNS server started"
        );

        Ok(Self {
            local_addr,
            server: Some(server),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops serving and waits until both listeners are closed.
    pub async fn stop(&mut self) {
        let Some(mut server) = self.server.take() else {
            return;
        };

        if let Err(e) = server.shutdown_gracefully().await {
            warn!(error = %e, "Stub DNS server did not shut down cleanly");
        }
        info!(bind_address = %self.local_addr, "Stub DNS server stopped");
    }
}

#[async_trait]
impl StubResolverHandle for StubDnsServer {
    fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    async fn release(mut self: Box<Self>) {
        self.stop().await;
    }
}

impl Drop for StubDnsServer {
    fn drop(&mut self) {
        if let Some(server) = &self.server {
            server.shutdown_token().cancel();
        }
    }
}

fn create_tcp_listener(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(128)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
