//! Compressed NFT workflow on Solana: create a Bubblegum tree, mint into it,
//! transfer and burn, with proofs served by a DAS indexer.

pub mod burn;
pub mod cli;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod leaf_update;
pub mod mint;
pub mod run;
pub mod telemetry;
pub mod transfer;
pub mod tree;
pub mod wallet;
