use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use log::Level;
use serde::Serialize;
use thiserror::Error;

use crate::{
    logger::{self, Logger},
    output,
};

pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum NodeConfigError {
    #[error("node name `{0}` is not a plain directory name")]
    Name(String),
    #[error("unable to serialize option `{name}`: {source}")]
    Option {
        name: String,
        #[source]
        source: toml::ser::Error,
    },
    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NodeConfigError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, NodeConfigError::Write { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
    }
}

///
/// Line by line builder for a node's `config.toml`.
///
/// ```
/// use netcreate::node_config::NodeConfig;
///
/// let config = NodeConfig::new()
///     .add_comment("RPC")
///     .add_option("rpc-http-enabled", true);
///
/// assert_eq!(config.contents(), "# RPC\nrpc-http-enabled = true\n");
/// ```
///
pub struct NodeConfig {
    text: String,
    error: Option<NodeConfigError>,
    logger: Logger,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeConfig {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            error: None,
            logger: logger::global(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn add_empty_line(mut self) -> Self {
        self.text.push('\n');
        self
    }

    pub fn add_comment(mut self, comment: &str) -> Self {
        self.text.push_str("# ");
        self.text.push_str(comment);
        self.text.push('\n');
        self
    }

    ///
    /// Appends `name = value` formatted the way TOML wants the value.
    ///
    /// A value TOML cannot represent is remembered and reported by [NodeConfig::write], only the
    /// first one is kept.
    ///
    pub fn add_option<V: Serialize>(mut self, name: &str, value: V) -> Self {
        let mut option = BTreeMap::new();
        option.insert(name, value);

        match toml::to_string(&option) {
            Ok(line) => self.text.push_str(&line),
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(NodeConfigError::Option {
                        name: name.into(),
                        source: e,
                    });
                }
            }
        }

        self
    }

    pub fn contents(&self) -> &str {
        &self.text
    }

    ///
    /// Writes `config.toml` into `dir`, failing if the file already exists.
    ///
    pub fn write(self, dir: &Path) -> Result<PathBuf, NodeConfigError> {
        emit!(self.logger, Level::Debug, "{}", self.text);

        if let Some(e) = self.error {
            emit!(self.logger, Level::Error, "Unable to build node configuration file: {}", e);
            return Err(e);
        }

        let path = dir.join(CONFIG_FILENAME);

        if let Err(e) = output::write_new(&path, self.text.as_bytes(), &self.logger) {
            let e = NodeConfigError::Write { path, source: e };
            emit!(self.logger, Level::Error, "Unable to write node configuration file: {}", e);
            return Err(e);
        }

        Ok(path)
    }
}
