use std::{
    io,
    path::{Path, PathBuf},
};

use log::Level;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    loader::{LoadError, ResourceLoader},
    logger::{self, Logger},
    network::Network,
    output,
};

pub const GENESIS_FILENAME: &str = "genesis.json";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unable to load genesis template: {0}")]
    Template(#[from] LoadError),
    #[error("network has no consensus configuration")]
    MissingConsensus,
    #[error("genesis template has no `{0}` object")]
    Shape(&'static str),
    #[error("unable to serialize genesis: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerationError {
    /// The output file was already there and has been left alone.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, GenerationError::Write { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
    }
}

///
/// Merges a [Network] into the genesis template of its consensus family.
///
pub struct GenesisBuilder<L> {
    loader: L,
    logger: Logger,
}

impl<L: ResourceLoader> GenesisBuilder<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            logger: logger::global(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    ///
    /// Builds the genesis document in memory.
    ///
    /// Accounts overwrite template entries with the same address, a later account overwrites an
    /// earlier one.
    ///
    pub fn build(&self, network: &Network) -> Result<Value, GenerationError> {
        let consensus = network.consensus().ok_or(GenerationError::MissingConsensus)?;
        let mut genesis: Map<String, Value> = self.loader.load(consensus.template())?;

        // parsed from text to keep ids wider than 64 bits exact
        let chain_id: Value = serde_json::from_str(&network.chain_id().to_string())?;

        let config = genesis
            .get_mut("config")
            .and_then(Value::as_object_mut)
            .ok_or(GenerationError::Shape("config"))?;
        config.insert("chainId".into(), chain_id);
        config.insert(consensus.family().into(), consensus.genesis_fragment());

        let extra_data = format!("0x{}", hex::encode(consensus.extra_data()));
        genesis.insert("extraData".into(), Value::String(extra_data));

        let alloc = genesis
            .entry("alloc")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or(GenerationError::Shape("alloc"))?;

        for account in network.accounts().unwrap_or_default() {
            alloc.insert(account.alloc_key(), account.genesis_fragment());
        }

        Ok(Value::Object(genesis))
    }

    /// The pretty printed genesis file contents.
    pub fn render(&self, network: &Network) -> Result<String, GenerationError> {
        let genesis = self.build(network)?;
        let mut text = serde_json::to_string_pretty(&genesis)?;
        text.push('\n');
        Ok(text)
    }

    ///
    /// Writes `genesis.json` into `dir`.
    ///
    /// Fails without touching anything if the file already exists. Nothing is written when the
    /// document cannot be built.
    ///
    pub fn generate(&self, network: &Network, dir: &Path) -> Result<PathBuf, GenerationError> {
        let text = match self.render(network) {
            Ok(text) => text,
            Err(e) => {
                emit!(self.logger, Level::Error, "Unable to generate genesis file JSON: {}", e);
                return Err(e);
            }
        };

        let path = dir.join(GENESIS_FILENAME);

        if let Err(e) = output::write_new(&path, text.as_bytes(), &self.logger) {
            let e = GenerationError::Write { path, source: e };
            emit!(self.logger, Level::Error, "Unable to write genesis file: {}", e);
            return Err(e);
        }

        emit!(self.logger, Level::Info, "Genesis file wrote to {}", path.display());

        Ok(path)
    }
}
