use std::fs;
use std::path::Path;

use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint};

use crate::error::ClientError;

/// One TLS-secured channel to the target peer, shared by every remote call
/// for the lifetime of the process.
///
/// The connection is established eagerly: an unreachable peer fails
/// `connect`, not the first command.
#[derive(Debug)]
pub struct Transport {
    channel: Channel,
}

impl Transport {
    /// Connect to `endpoint` (`host:port`), trusting `tls_cert_path` as the
    /// root certificate and expecting `host_alias` as the TLS server name.
    /// The alias covers deployments where the name on the peer certificate
    /// differs from the address used to reach it.
    pub async fn connect(
        endpoint: &str,
        tls_cert_path: &Path,
        host_alias: &str,
    ) -> Result<Self, ClientError> {
        let root_cert = fs::read(tls_cert_path).map_err(|source| ClientError::CredentialIo {
            path: tls_cert_path.to_owned(),
            source,
        })?;
        let tls = ClientTlsConfig::new()
            .ca_certificate(Certificate::from_pem(root_cert))
            .domain_name(host_alias);

        let channel = Endpoint::from_shared(format!("https://{endpoint}"))
            .map_err(ClientError::connection)?
            .tls_config(tls)
            .map_err(ClientError::connection)?
            .connect()
            .await
            .map_err(ClientError::connection)?;

        info!("connected to peer {endpoint} (TLS server name {host_alias})");
        Ok(Self { channel })
    }

    /// The channel is cheaply clonable; calls multiplex over the one
    /// underlying connection.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }

    /// Release the channel. Must be called exactly once, after the session
    /// using it has been closed.
    pub fn close(self) {
        drop(self.channel);
    }
}
