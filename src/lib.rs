#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
#![allow(clippy::multiple_crate_versions)]
#![deny(unused_crate_dependencies)]

mod balance;
mod call;
mod calldata;
pub mod rpc;

pub use balance::Balance;
pub use call::Call;
pub use calldata::CallData;
pub use rpc::RpcError;

// only used by the binary
use anyhow as _;
use tokio as _;

// only used by the integration tests
#[cfg(test)]
use wiremock as _;
