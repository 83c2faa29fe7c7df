mod common;

use log::Level;
use netcreate::{
    consensus::{Clique, ConsensusConfig},
    genesis::{GenerationError, GenesisBuilder, GENESIS_FILENAME},
    loader::{JsonLoader, LoadError, ResourceLoader},
    network::Network,
};
use num_bigint::BigInt;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};


struct StaticLoader(&'static str);

impl ResourceLoader for StaticLoader {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        serde_json::from_str(self.0).map_err(|e| LoadError::Parse {
            name: name.into(),
            source: Box::new(e),
        })
    }
}

struct MissingLoader;

impl ResourceLoader for MissingLoader {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        Err(LoadError::NotFound(name.into()))
    }
}

fn template_alloc() -> Map<String, Value> {
    let template: Value = JsonLoader::new().load("clique-genesis-template.json").unwrap();
    template["alloc"].as_object().unwrap().clone()
}

#[test]
fn mynet() {
    let dir = tempfile::tempdir().unwrap();
    let network = common::network(246, vec![common::account("abc0000000000000000000000000000000000001", 1)]);

    let path = GenesisBuilder::new(JsonLoader::new())
        .generate(&network, dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join(GENESIS_FILENAME));

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"chainId\": 246"));

    let genesis: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(genesis["config"]["chainId"], json!(246));
    assert_eq!(
        genesis["alloc"]["abc0000000000000000000000000000000000001"],
        json!({"balance": "0x1"})
    );
}

#[test]
fn consensus_fragment_and_extra_data() {
    let signer = common::address("fe3b557e8fb62b89f4916b721be55ceb828dbd73");
    let clique = Clique {
        block_period_seconds: 5,
        epoch_length: 100,
        signers: vec![signer],
    };
    let network = Network::new(Some("mynet".into()), Some(BigInt::from(9)), Some(clique.into()), None);

    let genesis = GenesisBuilder::new(JsonLoader::new()).build(&network).unwrap();

    assert_eq!(
        genesis["config"]["clique"],
        json!({"blockperiodseconds": 5, "epochlength": 100})
    );

    let expected = format!(
        "0x{}fe3b557e8fb62b89f4916b721be55ceb828dbd73{}",
        "00".repeat(32),
        "00".repeat(65)
    );
    assert_eq!(genesis["extraData"], json!(expected));
}

#[test]
fn account_replaces_template_default() {
    let default = "fe3b557e8fb62b89f4916b721be55ceb828dbd73";
    let network = common::network(246, vec![common::account(default, 0x10)]);

    let genesis = GenesisBuilder::new(JsonLoader::new()).build(&network).unwrap();
    let alloc = genesis["alloc"].as_object().unwrap();

    assert_eq!(alloc[default], json!({"balance": "0x10"}));

    let mut expected = template_alloc();
    expected.insert(default.into(), json!({"balance": "0x10"}));
    assert_eq!(alloc, &expected);
}

#[test]
fn later_account_wins() {
    let address = "abc0000000000000000000000000000000000002";
    let network = common::network(246, vec![
        common::account(address, 1),
        common::account("abc0000000000000000000000000000000000003", 5),
        common::account(address, 2),
    ]);

    let genesis = GenesisBuilder::new(JsonLoader::new()).build(&network).unwrap();

    assert_eq!(genesis["alloc"][address], json!({"balance": "0x2"}));
    assert_eq!(genesis["alloc"].as_object().unwrap().len(), template_alloc().len() + 2);
}

#[test]
fn no_accounts_keeps_template_alloc() {
    let network = Network::new(Some("mynet".into()), Some(BigInt::from(1)), Some(Clique::default().into()), None);

    let genesis = GenesisBuilder::new(JsonLoader::new()).build(&network).unwrap();

    assert_eq!(genesis["alloc"].as_object().unwrap(), &template_alloc());
}

#[test]
fn wide_chain_id_is_written_as_integer() {
    let dir = tempfile::tempdir().unwrap();
    let id: BigInt = "1267650600228229401496703205375".parse().unwrap();
    let network = Network::new(Some("mynet".into()), Some(id), Some(Clique::default().into()), None);

    GenesisBuilder::new(JsonLoader::new()).generate(&network, dir.path()).unwrap();

    let text = std::fs::read_to_string(dir.path().join(GENESIS_FILENAME)).unwrap();
    assert!(text.contains("\"chainId\": 1267650600228229401496703205375,"));
}

#[test]
fn generation_is_create_only() {
    let dir = tempfile::tempdir().unwrap();
    let builder = GenesisBuilder::new(JsonLoader::new());

    let path = builder.generate(&common::network(246, Vec::new()), dir.path()).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let err = builder
        .generate(&common::network(247, Vec::new()), dir.path())
        .unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let capture = common::Capture::new();

    let err = GenesisBuilder::new(MissingLoader)
        .with_logger(capture.logger())
        .generate(&common::network(246, Vec::new()), dir.path())
        .unwrap_err();

    assert!(matches!(err, GenerationError::Template(LoadError::NotFound(_))));
    assert!(!dir.path().join(GENESIS_FILENAME).exists());
    assert_eq!(capture.at(Level::Error).len(), 1);
}

#[test]
fn template_without_config() {
    let dir = tempfile::tempdir().unwrap();

    let err = GenesisBuilder::new(StaticLoader(r#"{ "alloc": {} }"#))
        .generate(&common::network(246, Vec::new()), dir.path())
        .unwrap_err();

    assert!(matches!(err, GenerationError::Shape("config")));
    assert!(!dir.path().join(GENESIS_FILENAME).exists());
}

#[test]
fn template_without_alloc() {
    let network = common::network(246, vec![common::account("abc0000000000000000000000000000000000001", 1)]);

    let genesis = GenesisBuilder::new(StaticLoader(r#"{ "config": {} }"#))
        .build(&network)
        .unwrap();

    assert_eq!(genesis["alloc"], json!({"abc0000000000000000000000000000000000001": {"balance": "0x1"}}));
}

#[test]
fn missing_consensus() {
    let dir = tempfile::tempdir().unwrap();
    let network = Network::new(Some("mynet".into()), Some(BigInt::from(1)), None, None);

    let err = GenesisBuilder::new(JsonLoader::new())
        .generate(&network, dir.path())
        .unwrap_err();

    assert!(matches!(err, GenerationError::MissingConsensus));
    assert!(!dir.path().join(GENESIS_FILENAME).exists());
}

#[test]
fn missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let capture = common::Capture::new();

    let err = GenesisBuilder::new(JsonLoader::new())
        .with_logger(capture.logger())
        .generate(&common::network(246, Vec::new()), &dir.path().join("missing"))
        .unwrap_err();

    assert!(matches!(err, GenerationError::Write { .. }));
    assert!(!err.is_already_exists());
    assert_eq!(capture.at(Level::Error).len(), 1);
}

#[test]
fn clique_is_the_only_family() {
    let consensus = ConsensusConfig::Clique(Clique::default());

    assert_eq!(consensus.family(), "clique");
    assert!(JsonLoader::bundled(consensus.template()).is_some());
    assert_eq!(consensus.extra_data().len(), 32 + 65);
}
