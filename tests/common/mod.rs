#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use log::{Level, Log, Metadata, Record};
use netcreate::{
    consensus::{Clique, ConsensusConfig},
    logger::Logger,
    network::{Account, Network},
};
use num_bigint::BigInt;
use primitive_types::{H160, U256};


///
/// A [Log] keeping everything it is given.
///
#[derive(Default)]
pub struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Capture {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn logger(self: &Arc<Self>) -> Logger {
        self.clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn address(unprefixed: &str) -> H160 {
    H160::from_slice(&hex::decode(unprefixed).unwrap())
}

pub fn account(unprefixed: &str, balance: u64) -> Account {
    Account::new(address(unprefixed), U256::from(balance))
}

pub fn network(chain_id: i64, accounts: Vec<Account>) -> Network {
    Network::new(
        Some("mynet".into()),
        Some(BigInt::from(chain_id)),
        Some(ConsensusConfig::Clique(Clique::default())),
        Some(accounts),
    )
}
