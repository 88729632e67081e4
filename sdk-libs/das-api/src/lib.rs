//! Client for the Digital Asset Standard (DAS) indexer API.
//!
//! DAS providers serve every method as JSON-RPC on a single endpoint, usually
//! the same one that serves the Solana RPC. Only the read methods needed to
//! move compressed NFTs are covered: `getAsset` and `getAssetProof`.

pub mod apis;
pub mod models;
