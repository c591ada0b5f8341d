use crate::calldata::CallData;
use crate::rpc::{Response, RpcError};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

pub struct Call {
    target: String,
    call_data: CallData,
}

impl Call {
    pub fn new(target: String, call_data: CallData) -> Self {
        Self { target, call_data }
    }

    pub async fn dispatch(self, client: &Client, rpc_url: &str) -> Result<String, RpcError> {
        let params = json!([
            {
                "to"   : self.target,
                "data" : format!("0x{}", self.call_data.raw())
            },
            "latest"
        ]);

        let payload = create_payload("eth_call", params, 1);

        let res = client.post(rpc_url).json(&payload).send().await?;
        let status = res.status();

        match status {
            StatusCode::OK => {
                let response: Response = res.json().await?;
                Ok(response.result)
            }
            _ => Err(RpcError::Unknown(status.as_u16())),
        }
    }
}

fn create_payload(method: &str, params: Value, id: u32) -> Value {
    json!({
        "method"  : method,
        "params"  : params,
        "id"      : id,
        "jsonrpc" : "2.0"
    })
}
