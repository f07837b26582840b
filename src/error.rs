use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Phase of a remote call that can exhaust its deadline budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Evaluate,
    Endorse,
    Submit,
    Commit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Evaluate => "evaluate",
            Phase::Endorse => "endorsement",
            Phase::Submit => "submission",
            Phase::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// Everything that can go wrong between the operator and the remote contract.
///
/// Startup failures (credentials, connection) are fatal; everything else is
/// reported per command and the dispatcher loop keeps running.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read credential material at {path}: {source}")]
    CredentialIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("key directory {path} must contain exactly one file, found {count}")]
    KeyDirectory { path: PathBuf, count: usize },

    #[error("failed to parse private key at {path}: {message}")]
    KeyParse { path: PathBuf, message: String },

    #[error("peer connection failed: {message}")]
    Connection { message: String },

    #[error("remote {phase} phase timed out after {budget:?}")]
    Timeout { phase: Phase, budget: Duration },

    #[error("contract returned an error: {message}")]
    Invocation { message: String },

    #[error("response payload is not valid JSON")]
    MalformedResponse { raw: String },

    #[error("gateway session is already closed")]
    SessionClosed,

    #[error("unrecognized menu choice `{0}`")]
    InvalidChoice(String),
}

impl ClientError {
    /// Collapse an error and its source chain into a `Connection` message.
    /// Transport errors from the gRPC stack tend to bury the interesting part
    /// (DNS failure, refused connection, bad certificate) one or two causes
    /// deep.
    pub(crate) fn connection(err: impl std::error::Error) -> Self {
        let mut message = err.to_string();
        let mut cause = err.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        ClientError::Connection { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_names_the_phase() {
        let err = ClientError::Timeout {
            phase: Phase::Commit,
            budget: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "remote commit phase timed out after 60s");
    }

    #[test]
    fn connection_display_includes_the_cause_chain() {
        let source = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ClientError::connection(source);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn categories_are_distinguishable_by_display() {
        let errors = [
            ClientError::Invocation {
                message: "asset not found".into(),
            },
            ClientError::SessionClosed,
            ClientError::InvalidChoice("42".into()),
            ClientError::MalformedResponse { raw: "<html>".into() },
        ];
        let texts: Vec<String> = errors.iter().map(ToString::to_string).collect();
        for (i, text) in texts.iter().enumerate() {
            for other in texts.iter().skip(i + 1) {
                assert_ne!(text, other);
            }
        }
    }
}
