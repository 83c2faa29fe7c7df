use serde::{Deserialize, Serialize};

///
/// A node to bootstrap, its configuration ends up in a directory of the same name.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub rpc_http_enabled: bool,
    #[serde(default)]
    pub rpc_http_port: Option<u16>,
    #[serde(default)]
    pub p2p_port: Option<u16>,
    /// Enode URLs the node dials on startup.
    #[serde(default)]
    pub bootnodes: Vec<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_http_enabled: false,
            rpc_http_port: None,
            p2p_port: None,
            bootnodes: Vec::new(),
        }
    }
}
