use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};


///
/// Settings of one `netcreate` run.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// The JSON network description.
    pub init_file: PathBuf,
    /// Directory receiving the genesis file and the node directories.
    pub output: PathBuf,
    /// Directory the init file name is resolved against.
    #[serde(default)]
    pub resources: Option<PathBuf>,
}

impl Config {
    pub fn load(filename: &Path) -> Result<Config, anyhow::Error> {
        let data = std::fs::read_to_string(filename)?;
        Ok(toml::from_str(&data)?)
    }
}
