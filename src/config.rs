//! Server configuration
//!
//! Every option can come from the command line or the environment. An
//! empty value counts as unset and falls back to the default.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Parser, Debug, Clone)]
#[command(name = "country_data")]
#[command(about = "HTTP lookup service over a static table of locations")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value_t = DEFAULT_HOST, value_parser = parse_host)]
    pub host: IpAddr,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    value
        .parse()
        .map_err(|e| format!("invalid port '{}': {}", value, e))
}

fn parse_host(value: &str) -> Result<IpAddr, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_HOST);
    }
    value
        .parse()
        .map_err(|e| format!("invalid host '{}': {}", value, e))
}
