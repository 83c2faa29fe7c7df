#![doc = include_str!("../README.md")]

#[macro_use]
pub mod logger;

pub mod config;
pub mod consensus;
pub mod generate;
pub mod genesis;
pub mod loader;
pub mod network;
pub mod node_config;
pub mod verify;

mod output;
