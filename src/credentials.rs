use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use p256::ecdsa::signature::Signer as _;
use p256::ecdsa::{Signature, SigningKey};
use p256::pkcs8::DecodePrivateKey as _;

use crate::error::ClientError;

/// Client identity as recognized by the network's membership service:
/// the organization namespace plus the enrollment certificate bytes.
#[derive(Clone, Debug)]
pub struct Identity {
    pub msp_id: String,
    pub credentials: Vec<u8>,
}

impl Identity {
    pub fn from_cert_file(msp_id: impl Into<String>, cert_path: &Path) -> Result<Self, ClientError> {
        let credentials = read_credential(cert_path)?;
        Ok(Self {
            msp_id: msp_id.into(),
            credentials,
        })
    }
}

/// Produces DER-encoded ECDSA P-256 signatures over arbitrary payloads.
///
/// The key itself never leaves this struct; only signatures cross the wire.
#[derive(Clone)]
pub struct Signer {
    key: SigningKey,
}

impl Signer {
    /// Load the signing key from a directory expected to hold exactly one
    /// PKCS#8 PEM file. A directory with zero or several files is rejected;
    /// the loader never picks an arbitrary entry.
    pub fn from_key_dir(key_dir: &Path) -> Result<Self, ClientError> {
        let mut files: Vec<PathBuf> = fs::read_dir(key_dir)
            .map_err(|source| ClientError::CredentialIo {
                path: key_dir.to_owned(),
                source,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();

        if files.len() != 1 {
            return Err(ClientError::KeyDirectory {
                path: key_dir.to_owned(),
                count: files.len(),
            });
        }
        Self::from_key_file(&files.remove(0))
    }

    pub fn from_key_file(key_path: &Path) -> Result<Self, ClientError> {
        let pem = read_credential(key_path)?;
        let pem = std::str::from_utf8(&pem).map_err(|_| ClientError::KeyParse {
            path: key_path.to_owned(),
            message: "key file is not valid UTF-8 PEM".to_owned(),
        })?;
        let key = SigningKey::from_pkcs8_pem(pem).map_err(|err| ClientError::KeyParse {
            path: key_path.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self { key })
    }

    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let signature: Signature = self.key.sign(payload);
        signature.to_der().as_bytes().to_vec()
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Signer")
    }
}

fn read_credential(path: &Path) -> Result<Vec<u8>, ClientError> {
    fs::read(path).map_err(|source| ClientError::CredentialIo {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::signature::Verifier as _;
    use p256::pkcs8::{EncodePrivateKey as _, LineEnding};
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gateway-credentials-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_key(dir: &Path, name: &str) -> SigningKey {
        let key = SigningKey::random(&mut rand_core::OsRng);
        let pem = key.to_pkcs8_pem(LineEnding::LF).unwrap();
        fs::write(dir.join(name), pem.as_bytes()).unwrap();
        key
    }

    #[test]
    fn identity_reads_certificate_bytes() {
        let dir = scratch_dir();
        let cert_path = dir.join("cert.pem");
        fs::write(&cert_path, b"-----BEGIN CERTIFICATE-----\n").unwrap();

        let identity = Identity::from_cert_file("Org1MSP", &cert_path).unwrap();
        assert_eq!(identity.msp_id, "Org1MSP");
        assert_eq!(identity.credentials, b"-----BEGIN CERTIFICATE-----\n");
    }

    #[test]
    fn identity_missing_certificate_is_a_credential_error() {
        let err = Identity::from_cert_file("Org1MSP", Path::new("/nonexistent/cert.pem"))
            .unwrap_err();
        assert!(matches!(err, ClientError::CredentialIo { .. }));
    }

    #[test]
    fn signatures_verify_against_the_loaded_key() {
        let dir = scratch_dir();
        let key = write_key(&dir, "priv_sk");

        let signer = Signer::from_key_dir(&dir).unwrap();
        let payload = b"proposal bytes";
        let der = signer.sign(payload);

        let signature = Signature::from_der(&der).unwrap();
        key.verifying_key().verify(payload, &signature).unwrap();
    }

    #[test]
    fn empty_key_directory_is_rejected() {
        let dir = scratch_dir();
        let err = Signer::from_key_dir(&dir).unwrap_err();
        assert!(matches!(err, ClientError::KeyDirectory { count: 0, .. }));
    }

    #[test]
    fn ambiguous_key_directory_is_rejected() {
        let dir = scratch_dir();
        write_key(&dir, "priv_sk");
        write_key(&dir, "priv_sk.bak");
        let err = Signer::from_key_dir(&dir).unwrap_err();
        assert!(matches!(err, ClientError::KeyDirectory { count: 2, .. }));
    }

    #[test]
    fn garbage_key_file_is_a_parse_error() {
        let dir = scratch_dir();
        fs::write(dir.join("priv_sk"), b"not a key").unwrap();
        let err = Signer::from_key_dir(&dir).unwrap_err();
        assert!(matches!(err, ClientError::KeyParse { .. }));
    }
}
