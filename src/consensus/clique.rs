use primitive_types::H160;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const VANITY_LENGTH: usize = 32;
const SEAL_LENGTH: usize = 65;

fn default_block_period() -> u64 {
    15
}

fn default_epoch_length() -> u64 {
    30_000
}

///
/// Clique proof of authority parameters.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Clique {
    /// Target time between two blocks.
    #[serde(default = "default_block_period")]
    pub block_period_seconds: u64,
    /// Number of blocks after which pending votes are reset.
    #[serde(default = "default_epoch_length")]
    pub epoch_length: u64,
    /// The initial signer set.
    #[serde(default)]
    pub signers: Vec<H160>,
}

impl Default for Clique {
    fn default() -> Self {
        Self {
            block_period_seconds: default_block_period(),
            epoch_length: default_epoch_length(),
            signers: Vec::new(),
        }
    }
}

impl Clique {
    pub fn genesis_fragment(&self) -> Value {
        json!({
            "blockperiodseconds": self.block_period_seconds,
            "epochlength": self.epoch_length,
        })
    }

    ///
    /// Vanity bytes, the signer addresses in order and an empty seal.
    ///
    /// The genesis block has no proposer, so vanity and seal stay zeroed.
    ///
    pub fn extra_data(&self) -> Vec<u8> {
        let mut data = vec![0u8; VANITY_LENGTH];

        for signer in &self.signers {
            data.extend_from_slice(signer.as_bytes());
        }

        data.extend_from_slice(&[0u8; SEAL_LENGTH]);
        data
    }
}
