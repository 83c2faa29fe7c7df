pub mod clique;

use serde_json::Value;

pub use self::clique::Clique;

///
/// The consensus family of a network.
///
/// Each family brings its own genesis template and decides what goes into the
/// `config.<family>` section and the header extra data.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsensusConfig {
    Clique(Clique),
}

impl ConsensusConfig {
    /// The key of the family section inside the genesis `config`.
    pub fn family(&self) -> &'static str {
        match self {
            ConsensusConfig::Clique(_) => "clique",
        }
    }

    /// Name of the bundled genesis template for this family.
    pub fn template(&self) -> &'static str {
        match self {
            ConsensusConfig::Clique(_) => "clique-genesis-template.json",
        }
    }

    pub fn genesis_fragment(&self) -> Value {
        match self {
            ConsensusConfig::Clique(clique) => clique.genesis_fragment(),
        }
    }

    pub fn extra_data(&self) -> Vec<u8> {
        match self {
            ConsensusConfig::Clique(clique) => clique.extra_data(),
        }
    }
}

impl From<Clique> for ConsensusConfig {
    fn from(clique: Clique) -> Self {
        ConsensusConfig::Clique(clique)
    }
}
