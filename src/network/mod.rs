pub mod account;
pub mod chain_id;
pub mod node;

use num_bigint::BigInt;
use serde::Deserialize;

use crate::consensus::{Clique, ConsensusConfig};

pub use self::{
    account::Account,
    node::Node,
};

/// The init file as written by the user, before defaults are applied.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct NetworkSpec {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "chain_id::deserialize")]
    chain_id: Option<BigInt>,
    #[serde(default)]
    clique: Option<Clique>,
    #[serde(default)]
    accounts: Option<Vec<Account>>,
    #[serde(default)]
    nodes: Option<Vec<Node>>,
}

///
/// The description of a private network.
///
/// Missing values are kept as such so the verifier can report them, with the exception of the
/// chain id which is filled with a random one on construction.
///
#[derive(Deserialize, Clone, Debug)]
#[serde(from = "NetworkSpec")]
pub struct Network {
    name: Option<String>,
    chain_id: BigInt,
    consensus: Option<ConsensusConfig>,
    accounts: Option<Vec<Account>>,
    nodes: Vec<Node>,
}

impl Network {
    pub fn new(
        name: Option<String>,
        chain_id: Option<BigInt>,
        consensus: Option<ConsensusConfig>,
        accounts: Option<Vec<Account>>,
    ) -> Self {
        Self {
            name,
            chain_id: chain_id.unwrap_or_else(chain_id::random),
            consensus,
            accounts,
            nodes: Vec::new(),
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn chain_id(&self) -> &BigInt {
        &self.chain_id
    }

    pub fn consensus(&self) -> Option<&ConsensusConfig> {
        self.consensus.as_ref()
    }

    /// The accounts in init file order, `None` when the template defaults are used as is.
    pub fn accounts(&self) -> Option<&[Account]> {
        self.accounts.as_deref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl From<NetworkSpec> for Network {
    fn from(spec: NetworkSpec) -> Self {
        let consensus = spec.clique.map(ConsensusConfig::Clique);

        Network::new(spec.name, spec.chain_id, consensus, spec.accounts)
            .with_nodes(spec.nodes.unwrap_or_default())
    }
}
