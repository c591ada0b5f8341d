use crate::rpc::RpcError;
use crate::rpc_error;

use primitive_types::U256;

use std::fmt;
use std::str::FromStr;

// assumes 18 decimals, not read from the contract
const WEI_PER_TOKEN: f64 = 10_u128.pow(18) as f64;

#[derive(Clone, Copy, Debug)]
pub struct Balance(f64);

impl Balance {
    pub fn from_rpc_result(result: &str) -> Result<Self, RpcError> {
        let wei = rpc_error!(U256::from_str(result))?;
        Ok(Self::from_wei(wei))
    }

    pub fn from_wei(wei: U256) -> Self {
        let tokens: f64 = wei
            .to_string()
            .parse()
            .expect("decimal digits parse as a float");

        Self(tokens / WEI_PER_TOKEN)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing `.0` on whole values
        <f64 as fmt::Debug>::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use primitive_types::U256;

    #[test]
    fn one_token() {
        let balance = Balance::from_rpc_result("0x0de0b6b3a7640000").unwrap();
        assert_eq!(balance.to_string(), "1.0");
    }

    #[test]
    fn zero_tokens() {
        let balance = Balance::from_rpc_result("0x0").unwrap();
        assert_eq!(balance.to_string(), "0.0");
    }

    #[test]
    fn sixteen_tokens() {
        let balance = Balance::from_wei(U256::from(16_000_000_000_000_000_000_u128));
        assert_eq!(balance.to_string(), "16.0");
    }

    #[test]
    fn malformed_result() {
        assert!(Balance::from_rpc_result("not hex").is_err());
    }
}
