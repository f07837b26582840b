#[macro_use]
extern crate log;

pub mod config;
pub mod credentials;
pub mod decode;
pub mod dispatcher;
pub mod error;
pub mod gateway;
pub mod pb;
pub mod transport;

pub use config::Config;
pub use credentials::{Identity, Signer};
pub use error::{ClientError, Phase};
pub use gateway::{Deadlines, Gateway, GrpcGateway, GrpcGatewayBuilder};
pub use transport::Transport;
