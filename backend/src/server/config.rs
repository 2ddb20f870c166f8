//! HTTP server configuration object.

use std::net::SocketAddr;

use observation_map::domain::BoundingBox;

/// Runtime configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) bounds: BoundingBox,
}

impl ServerConfig {
    /// Listen on `bind_addr` and validate submissions against `bounds`.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, bounds: BoundingBox) -> Self {
        Self { bind_addr, bounds }
    }

    /// Socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Read by the bootstrap tests")
    )]
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
