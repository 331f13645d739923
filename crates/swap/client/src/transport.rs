//! Transport security selection and channel setup.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};
use tracing::{debug, info};

use crate::{SwapClientConfig, SwapClientError, SwapClientResult};

/// How the channel to the swap server is secured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
    /// Plaintext HTTP/2.
    Insecure,
    /// TLS trusting only the certificate at this path.
    PinnedCertificate(PathBuf),
    /// TLS validated against the system trust store.
    SystemRoots,
}

impl TransportMode {
    /// Pick a mode. First match wins: insecure, then a non-empty certificate
    /// path, then the system trust store.
    pub fn select(insecure: bool, tls_path: Option<&Path>) -> Self {
        match tls_path {
            _ if insecure => Self::Insecure,
            Some(path) if !path.as_os_str().is_empty() => {
                Self::PinnedCertificate(path.to_path_buf())
            }
            _ => Self::SystemRoots,
        }
    }

    fn scheme(&self) -> &'static str {
        match self {
            Self::Insecure => "http",
            Self::PinnedCertificate(_) | Self::SystemRoots => "https",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insecure => f.write_str("insecure"),
            Self::PinnedCertificate(path) => write!(f, "pinned certificate {}", path.display()),
            Self::SystemRoots => f.write_str("system roots"),
        }
    }
}

/// Build the channel to the swap server described by `config`.
///
/// The certificate, if any, is loaded before anything is dialed. Unless
/// `lazy_connect` is set the address is dialed here, and an unreachable
/// server fails construction.
pub async fn connect_channel(config: &SwapClientConfig) -> SwapClientResult<Channel> {
    let mode = config.transport_mode();
    let endpoint = build_endpoint(&config.address, &mode).await?;

    if config.lazy_connect {
        info!(address = %config.address, %mode, "swap server channel created, connecting lazily");
        return Ok(endpoint.connect_lazy());
    }

    debug!(address = %config.address, %mode, "dialing swap server");
    let channel = endpoint
        .connect()
        .await
        .map_err(|source| SwapClientError::ChannelEstablishment {
            address: config.address.clone(),
            source,
        })?;

    info!(address = %config.address, %mode, "connected to swap server");
    Ok(channel)
}

async fn build_endpoint(address: &str, mode: &TransportMode) -> SwapClientResult<Endpoint> {
    let channel_error = |source| SwapClientError::ChannelEstablishment {
        address: address.to_string(),
        source,
    };

    let endpoint = Endpoint::from_shared(endpoint_uri(address, mode)).map_err(channel_error)?;

    let tls = match mode {
        TransportMode::Insecure => return Ok(endpoint),
        TransportMode::PinnedCertificate(path) => {
            ClientTlsConfig::new().ca_certificate(load_certificate(path).await?)
        }
        TransportMode::SystemRoots => ClientTlsConfig::new().with_native_roots(),
    };

    endpoint.tls_config(tls).map_err(channel_error)
}

fn endpoint_uri(address: &str, mode: &TransportMode) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("{}://{address}", mode.scheme())
    }
}

async fn load_certificate(path: &Path) -> SwapClientResult<Certificate> {
    let certificate_error = |source| SwapClientError::CertificateLoad {
        path: path.to_path_buf(),
        source,
    };

    let pem = tokio::fs::read(path).await.map_err(certificate_error)?;
    let certs = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<Vec<_>, _>>()
        .map_err(certificate_error)?;
    if certs.is_empty() {
        return Err(certificate_error(io::Error::new(
            io::ErrorKind::InvalidData,
            "no PEM certificate found",
        )));
    }
    debug!(path = %path.display(), count = certs.len(), "loaded pinned certificate");

    Ok(Certificate::from_pem(pem))
}
