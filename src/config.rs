use std::env;
use std::net::SocketAddr;

/// Listening port when neither a listen address nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 10000;

/// Read buffer size for streamed file bodies.
pub const FILE_STREAM_CAPACITY: usize = 64 * 1024;

/// Resolve the listen address once at startup: an explicit CLI address wins,
/// then the `PORT` environment variable, then [`DEFAULT_PORT`].
pub fn listen_addr(listen: Option<SocketAddr>) -> SocketAddr {
    match listen {
        Some(addr) => addr,
        None => SocketAddr::from(([0, 0, 0, 0], port_from_env())),
    }
}

pub fn port_from_env() -> u16 {
    parse_port(env::var("PORT").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
