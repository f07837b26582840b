//! Vendored wire-protocol stubs for the peer gateway service.
//!
//! The stubs under `src/generated/` are committed so that building the crate
//! does not require protoc; `proto/gateway/v1/gateway.proto` is the source of
//! truth for regeneration.

pub mod gateway {
    pub mod v1 {
        include!("generated/gateway.v1.rs");
    }
}
