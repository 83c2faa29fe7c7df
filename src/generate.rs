use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use log::Level;
use num_bigint::BigInt;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    genesis::{GenerationError, GenesisBuilder, GENESIS_FILENAME},
    loader::ResourceLoader,
    logger::{self, Logger},
    network::{Network, Node},
    node_config::{NodeConfig, NodeConfigError},
    verify::{verify, ValidationErrorReport},
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("network description is invalid:\n{0}")]
    Invalid(ValidationErrorReport),
    #[error("unable to create {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Genesis(#[from] GenerationError),
}

///
/// What happened to a single node.
///
#[derive(Debug)]
pub struct NodeOutcome {
    pub name: String,
    pub result: Result<PathBuf, NodeConfigError>,
}

///
/// The result of a generation run where the genesis file was written.
///
#[derive(Debug)]
pub struct Outcome {
    pub genesis: PathBuf,
    pub nodes: Vec<NodeOutcome>,
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        self.nodes.iter().all(|n| n.result.is_ok())
    }

    pub fn failed_nodes(&self) -> impl Iterator<Item = &NodeOutcome> {
        self.nodes.iter().filter(|n| n.result.is_err())
    }
}

///
/// Builds the node configuration for `node`.
///
/// Paths are relative to the node directory, which sits next to the genesis file. The network id
/// is left out when the chain id does not fit a TOML integer, nodes then take it from the genesis.
///
pub fn node_config(network: &Network, node: &Node) -> NodeConfig {
    let mut config = NodeConfig::new()
        .add_comment(&format!("Node {} of network {}", node.name, network.name().unwrap_or("unnamed")))
        .add_empty_line()
        .add_option("genesis-file", format!("../{}", GENESIS_FILENAME))
        .add_option("data-path", "data");

    if let Some(id) = network_id(network.chain_id()) {
        config = config.add_option("network-id", id);
    }

    config = config
        .add_empty_line()
        .add_comment("P2P");

    if let Some(port) = node.p2p_port {
        config = config.add_option("p2p-port", port);
    }

    if !node.bootnodes.is_empty() {
        config = config.add_option("bootnodes", &node.bootnodes);
    }

    config = config
        .add_empty_line()
        .add_comment("RPC")
        .add_option("rpc-http-enabled", node.rpc_http_enabled);

    if let Some(port) = node.rpc_http_port {
        config = config.add_option("rpc-http-port", port);
    }

    config
}

///
/// Turns a [Network] into a bootstrap kit on disk.
///
pub struct Generator<L> {
    genesis: GenesisBuilder<L>,
    logger: Logger,
}

impl<L: ResourceLoader> Generator<L> {
    pub fn new(loader: L) -> Self {
        Self::with_logger(loader, logger::global())
    }

    pub fn with_logger(loader: L, logger: Logger) -> Self {
        Self {
            genesis: GenesisBuilder::new(loader).with_logger(logger.clone()),
            logger,
        }
    }

    ///
    /// Verifies the network, writes the genesis file and then one configuration per node.
    ///
    /// Nothing is written for an invalid network. Once the genesis file exists every node is
    /// attempted, a failing node does not keep the others from being written.
    ///
    pub fn run(&self, network: &Network, out: &Path) -> Result<Outcome, GenerateError> {
        let report = verify(network);
        if !report.is_empty() {
            for error in report.iter() {
                emit!(self.logger, Level::Error, "{}", error);
            }
            return Err(GenerateError::Invalid(report));
        }

        create_dir(out)?;
        let genesis = self.genesis.generate(network, out)?;

        let logger = &self.logger;
        let nodes = network
            .nodes()
            .par_iter()
            .map(|node| NodeOutcome {
                name: node.name.clone(),
                result: write_node(network, node, out, logger),
            })
            .collect::<Vec<_>>();

        for failed in nodes.iter().filter(|n| n.result.is_err()) {
            emit!(self.logger, Level::Warn, "node {} has no configuration", failed.name);
        }

        Ok(Outcome { genesis, nodes })
    }
}

/// TOML integers are signed 64 bit.
fn network_id(chain_id: &BigInt) -> Option<i64> {
    i64::try_from(chain_id).ok()
}

/// A node name must be a single plain directory name, anything else would leave `out`.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

fn write_node(network: &Network, node: &Node, out: &Path, logger: &Logger) -> Result<PathBuf, NodeConfigError> {
    if !is_plain_name(&node.name) {
        let e = NodeConfigError::Name(node.name.clone());
        emit!(logger, Level::Error, "Unable to place node configuration: {}", e);
        return Err(e);
    }

    let dir = out.join(&node.name);

    if let Err(e) = fs::create_dir_all(&dir) {
        let e = NodeConfigError::Write { path: dir, source: e };
        emit!(logger, Level::Error, "Unable to create node directory: {}", e);
        return Err(e);
    }

    let path = node_config(network, node)
        .with_logger(logger.clone())
        .write(&dir)?;

    emit!(logger, Level::Info, "Node {} configuration wrote to {}", node.name, path.display());

    Ok(path)
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|e| GenerateError::OutputDir {
        path: path.into(),
        source: e,
    })
}
