use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize)]
pub struct Response {
    pub result: String,
}

#[derive(Error, Debug)]
pub enum RpcError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Got response with status code `{0}`")]
    Unknown(u16),
    #[error("{0}")]
    Other(String),
}

#[macro_export]
macro_rules! rpc_error {
    ($code:expr) => {
        $code.map_err(|err| $crate::rpc::RpcError::Other(err.to_string()))
    };
}
