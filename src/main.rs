use evm_balance_query::{Balance, Call, CallData, RpcError};

use anyhow::Result;
use reqwest::Client;

const RPC_URL: &str = "https://jsonrpc-yominet-1.anvil.asia-southeast.initia.xyz";
const USER_ADDRESS: &str = "0x5da4e32E2fF3136b0dBdc9DbCc4734B16918992A";
const TOKEN_ADDRESS: &str = "0x4badfb501ab304ff11217c44702bb9e9732e7cf4";

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::new();
    let call = Call::new(
        TOKEN_ADDRESS.to_string(),
        CallData::erc20_balance(USER_ADDRESS),
    );

    match call.dispatch(&client, RPC_URL).await {
        Ok(result) => {
            let balance = Balance::from_rpc_result(&result)?;
            println!("Balance of {USER_ADDRESS}: {balance} tokens");
        }
        Err(RpcError::Unknown(_)) => println!("Failed to retrieve balance data"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
