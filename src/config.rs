use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved once at startup from the environment.
///
/// Every knob has a default matching the conventional single-org test
/// network layout, so a bare `asset-gateway-client` run against a local
/// network needs no environment at all.
#[derive(Clone, Debug)]
pub struct Config {
    /// Ledger channel the contract is deployed to.
    pub channel_name: String,
    /// Name of the deployed contract.
    pub chaincode_name: String,
    /// Organization identity namespace of the client.
    pub msp_id: String,
    /// Root of the local credential material.
    pub crypto_path: PathBuf,
    /// Directory holding exactly one private key file.
    pub key_directory_path: PathBuf,
    /// Client certificate file.
    pub cert_path: PathBuf,
    /// Peer's TLS root certificate file.
    pub tls_cert_path: PathBuf,
    /// `host:port` of the target peer.
    pub peer_endpoint: String,
    /// TLS server-name override for the peer certificate.
    pub peer_host_alias: String,
}

impl Config {
    pub fn from_env() -> Self {
        let crypto_path = PathBuf::from(env_or_default(
            "CRYPTO_PATH",
            "../../test-network/organizations/peerOrganizations/org1.example.com",
        ));
        let key_directory_path = env_path("KEY_DIRECTORY_PATH")
            .unwrap_or_else(|| crypto_path.join("users/User1@org1.example.com/msp/keystore"));
        let cert_path = env_path("CERT_PATH")
            .unwrap_or_else(|| crypto_path.join("users/User1@org1.example.com/msp/signcerts/cert.pem"));
        let tls_cert_path = env_path("TLS_CERT_PATH")
            .unwrap_or_else(|| crypto_path.join("peers/peer0.org1.example.com/tls/ca.crt"));

        Self {
            channel_name: env_or_default("CHANNEL_NAME", "mychannel"),
            chaincode_name: env_or_default("CHAINCODE_NAME", "basic"),
            msp_id: env_or_default("MSP_ID", "Org1MSP"),
            crypto_path,
            key_directory_path,
            cert_path,
            tls_cert_path,
            peer_endpoint: env_or_default("PEER_ENDPOINT", "localhost:7051"),
            peer_host_alias: env_or_default("PEER_HOST_ALIAS", "peer0.org1.example.com"),
        }
    }

    /// Echo the resolved parameters so a misconfigured run is diagnosable
    /// from its log alone.
    pub fn log(&self) {
        info!("channelName:      {}", self.channel_name);
        info!("chaincodeName:    {}", self.chaincode_name);
        info!("mspId:            {}", self.msp_id);
        info!("cryptoPath:       {}", self.crypto_path.display());
        info!("keyDirectoryPath: {}", self.key_directory_path.display());
        info!("certPath:         {}", self.cert_path.display());
        info!("tlsCertPath:      {}", self.tls_cert_path.display());
        info!("peerEndpoint:     {}", self.peer_endpoint);
        info!("peerHostAlias:    {}", self.peer_host_alias);
    }
}

/// An unset or empty variable resolves to the default.
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
