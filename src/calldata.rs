// first 4 bytes of keccak256("balanceOf(address)")
const FUNC_BALANCE_OF: &str = "70a08231";

#[derive(Clone)]
pub struct CallData(String);

impl CallData {
    pub fn erc20_balance(user_address: &str) -> Self {
        Self(format!(
            "{FUNC_BALANCE_OF}{:0>64}",
            user_address.trim_start_matches("0x")
        ))
    }

    pub fn raw(&self) -> &str {
        self.0.as_ref()
    }
}
