use std::{
    io,
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};

use crate::config::ConnectionTarget;

/// Opens (and immediately closes) a connection to the dev server.
pub trait Connector {
    fn connect(&mut self, target: &ConnectionTarget) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct TcpConnector {
    timeout: Duration,
}

impl TcpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout: timeout.max(Duration::from_millis(50)),
        }
    }
}

impl Connector for TcpConnector {
    fn connect(&mut self, target: &ConnectionTarget) -> io::Result<()> {
        let addrs = (target.host.as_str(), target.port)
            .to_socket_addrs()?
            .collect::<Vec<_>>();

        let mut last_error = io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("{}:{} did not resolve", target.host, target.port),
        );
        for address in addrs {
            match TcpStream::connect_timeout(&address, self.timeout) {
                Ok(stream) => {
                    drop(stream);
                    return Ok(());
                }
                Err(error) => last_error = error,
            }
        }
        Err(last_error)
    }
}
