//! Connected UDP sockets shared by the OSC and Art-Net sides

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::{error::ControlError, Result};

/// Resolve `addr` (host:port) to its first socket address
pub fn resolve(addr: &str) -> Result<SocketAddr> {
    addr.to_socket_addrs()
        .map_err(|e| ControlError::connection(addr, e))?
        .next()
        .ok_or_else(|| {
            ControlError::connection(
                addr,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "address resolved to no socket addresses",
                ),
            )
        })
}

/// Open a UDP socket on an ephemeral local port and connect it to `addr`
///
/// The local side binds the unspecified address of the remote's family.
pub fn connect_udp(addr: &str) -> Result<UdpSocket> {
    let remote = resolve(addr)?;

    let local: SocketAddr = match remote {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };

    let socket = UdpSocket::bind(local).map_err(|e| ControlError::connection(addr, e))?;
    socket
        .connect(remote)
        .map_err(|e| ControlError::connection(addr, e))?;

    tracing::debug!(
        "UDP socket {:?} connected to {} ({})",
        socket.local_addr().ok(),
        addr,
        remote
    );

    Ok(socket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_literal() {
        let addr = resolve("127.0.0.1:6454").unwrap();
        assert_eq!(addr, "127.0.0.1:6454".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_resolve_invalid() {
        assert!(matches!(
            resolve("invalid:address"),
            Err(ControlError::Connection { .. })
        ));
        assert!(matches!(
            resolve("no-port"),
            Err(ControlError::Connection { .. })
        ));
    }

    #[test]
    fn test_connect_udp() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        let target = receiver.local_addr().unwrap().to_string();

        let socket = connect_udp(&target).unwrap();
        assert_eq!(socket.peer_addr().unwrap(), receiver.local_addr().unwrap());
    }
}
