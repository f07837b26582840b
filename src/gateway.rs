use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use prost::Message as _;
use tonic::transport::Channel;
use tonic::{Code, Status};
use uuid::Uuid;

use crate::credentials::{Identity, Signer};
use crate::error::{ClientError, Phase};
use crate::pb::gateway::v1::gateway_client::GatewayClient;
use crate::pb::gateway::v1::{
    CommitStatusRequest, EndorseRequest, EvaluateRequest, SerializedIdentity, SubmitRequest,
    TxValidationCode,
};

/// The two remote verbs a deployed contract exposes.
///
/// `evaluate` runs the named operation read-only at the serving peer;
/// `submit` drives the full write path and resolves only once the
/// transaction has committed (or failed to). Both return the contract's
/// response payload bytes.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn evaluate(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, ClientError>;
    async fn submit(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, ClientError>;
}

/// Per-phase deadline budget for remote calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadlines {
    pub evaluate: Duration,
    pub endorse: Duration,
    pub submit: Duration,
    pub commit: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            evaluate: Duration::from_secs(5),
            endorse: Duration::from_secs(15),
            submit: Duration::from_secs(5),
            commit: Duration::from_secs(60),
        }
    }
}

/// A gateway session over one peer channel, scoped to a single ledger
/// channel and a single deployed contract for its whole lifetime.
pub struct GrpcGateway {
    client: GatewayClient<Channel>,
    identity: Identity,
    signer: Signer,
    channel_name: String,
    chaincode_name: String,
    deadlines: Deadlines,
    closed: AtomicBool,
}

#[derive(Debug)]
pub struct GrpcGatewayBuilder {
    channel: Channel,
    identity: Identity,
    signer: Signer,
    channel_name: String,
    chaincode_name: String,
    deadlines: Deadlines,
}

impl GrpcGatewayBuilder {
    /// Target ledger channel. Defaults to `mychannel`.
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }

    /// Deployed contract name. Defaults to `basic`.
    pub fn contract(mut self, name: impl Into<String>) -> Self {
        self.chaincode_name = name.into();
        self
    }

    pub fn deadlines(mut self, deadlines: Deadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    pub fn build(self) -> GrpcGateway {
        GrpcGateway {
            client: GatewayClient::new(self.channel),
            identity: self.identity,
            signer: self.signer,
            channel_name: self.channel_name,
            chaincode_name: self.chaincode_name,
            deadlines: self.deadlines,
            closed: AtomicBool::new(false),
        }
    }
}

impl GrpcGateway {
    pub fn builder(channel: Channel, identity: Identity, signer: Signer) -> GrpcGatewayBuilder {
        GrpcGatewayBuilder {
            channel,
            identity,
            signer,
            channel_name: "mychannel".to_owned(),
            chaincode_name: "basic".to_owned(),
            deadlines: Deadlines::default(),
        }
    }

    /// Release the session. Idempotent; any verb used afterwards fails with
    /// `SessionClosed`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn ensure_open(&self) -> Result<(), ClientError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ClientError::SessionClosed);
        }
        Ok(())
    }

    fn creator(&self) -> SerializedIdentity {
        SerializedIdentity {
            msp_id: self.identity.msp_id.clone(),
            credentials: self.identity.credentials.clone(),
        }
    }
}

#[async_trait]
impl Gateway for GrpcGateway {
    async fn evaluate(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, ClientError> {
        self.ensure_open()?;
        let transaction_id = Uuid::new_v4().to_string();

        let mut request = EvaluateRequest {
            transaction_id: transaction_id.clone(),
            channel_id: self.channel_name.clone(),
            chaincode_id: self.chaincode_name.clone(),
            transaction_name: operation.to_owned(),
            args: args.to_vec(),
            creator: Some(self.creator()),
            signature: Vec::new(),
        };
        request.signature = self.signer.sign(&request.encode_to_vec());

        info!("evaluate {operation} (transaction {transaction_id})");
        let mut client = self.client.clone();
        let response = with_deadline(
            Phase::Evaluate,
            self.deadlines.evaluate,
            client.evaluate(request),
        )
        .await?;
        Ok(response.into_inner().payload)
    }

    async fn submit(&self, operation: &str, args: &[String]) -> Result<Vec<u8>, ClientError> {
        self.ensure_open()?;
        let transaction_id = Uuid::new_v4().to_string();
        let mut client = self.client.clone();

        let mut endorse_request = EndorseRequest {
            transaction_id: transaction_id.clone(),
            channel_id: self.channel_name.clone(),
            chaincode_id: self.chaincode_name.clone(),
            transaction_name: operation.to_owned(),
            args: args.to_vec(),
            creator: Some(self.creator()),
            signature: Vec::new(),
        };
        endorse_request.signature = self.signer.sign(&endorse_request.encode_to_vec());

        info!("submit {operation} (transaction {transaction_id})");
        let endorsement = with_deadline(
            Phase::Endorse,
            self.deadlines.endorse,
            client.endorse(endorse_request),
        )
        .await?
        .into_inner();

        let submit_request = SubmitRequest {
            transaction_id: transaction_id.clone(),
            channel_id: self.channel_name.clone(),
            prepared_transaction: endorsement.prepared_transaction.clone(),
            signature: self.signer.sign(&endorsement.prepared_transaction),
        };
        with_deadline(
            Phase::Submit,
            self.deadlines.submit,
            client.submit(submit_request),
        )
        .await?;

        let mut status_request = CommitStatusRequest {
            transaction_id: transaction_id.clone(),
            channel_id: self.channel_name.clone(),
            creator: Some(self.creator()),
            signature: Vec::new(),
        };
        status_request.signature = self.signer.sign(&status_request.encode_to_vec());

        let status = with_deadline(
            Phase::Commit,
            self.deadlines.commit,
            client.commit_status(status_request),
        )
        .await?
        .into_inner();

        let code = TxValidationCode::try_from(status.result)
            .unwrap_or(TxValidationCode::InvalidOtherReason);
        if code != TxValidationCode::Valid {
            return Err(ClientError::Invocation {
                message: format!(
                    "transaction {transaction_id} failed to commit with status {}",
                    code.as_str_name()
                ),
            });
        }

        info!("transaction {transaction_id} committed in block {}", status.block_number);
        Ok(endorsement.payload)
    }
}

/// Run one remote call under its phase budget, folding both local deadline
/// expiry and remote status codes into the client taxonomy.
async fn with_deadline<T>(
    phase: Phase,
    budget: Duration,
    call: impl Future<Output = Result<tonic::Response<T>, Status>>,
) -> Result<tonic::Response<T>, ClientError> {
    match tokio::time::timeout(budget, call).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(status)) => Err(status_to_error(status)),
        Err(_) => Err(ClientError::Timeout { phase, budget }),
    }
}

/// A contract-reported failure must stay distinguishable from a transport
/// outage: the former carries the contract's own message verbatim.
fn status_to_error(status: Status) -> ClientError {
    match status.code() {
        Code::Unavailable => ClientError::Connection {
            message: status.message().to_owned(),
        },
        _ => ClientError::Invocation {
            message: status.message().to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deadlines_match_the_documented_budget() {
        let deadlines = Deadlines::default();
        assert_eq!(deadlines.evaluate, Duration::from_secs(5));
        assert_eq!(deadlines.endorse, Duration::from_secs(15));
        assert_eq!(deadlines.submit, Duration::from_secs(5));
        assert_eq!(deadlines.commit, Duration::from_secs(60));
    }

    #[test]
    fn contract_status_maps_to_invocation_with_verbatim_message() {
        let err = status_to_error(Status::aborted("asset asset7 does not exist"));
        match err {
            ClientError::Invocation { message } => {
                assert_eq!(message, "asset asset7 does not exist")
            }
            other => panic!("expected Invocation, got {other:?}"),
        }
    }

    #[test]
    fn unavailable_status_maps_to_connection() {
        let err = status_to_error(Status::unavailable("connection reset"));
        assert!(matches!(err, ClientError::Connection { .. }));
    }

    #[tokio::test]
    async fn deadline_expiry_names_the_phase() {
        let err = with_deadline(Phase::Commit, Duration::from_millis(5), async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(tonic::Response::new(()))
        })
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Timeout {
                phase: Phase::Commit,
                ..
            }
        ));
    }
}
