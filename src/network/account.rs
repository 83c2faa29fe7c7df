use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

///
/// A pre-funded address in the genesis block.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    address: H160,
    balance: U256,
}

impl Account {
    pub fn new(address: H160, balance: U256) -> Self {
        Self { address, balance }
    }

    pub fn address(&self) -> &H160 {
        &self.address
    }

    pub fn balance(&self) -> &U256 {
        &self.balance
    }

    /// The key of this account in the genesis `alloc` section.
    pub fn alloc_key(&self) -> String {
        hex::encode(self.address.as_bytes())
    }

    pub fn genesis_fragment(&self) -> Value {
        json!({
            "balance": format!("{:#x}", self.balance),
        })
    }
}
