use std::fmt::{Display, Formatter};

use cnft_bubblegum::BubblegumError;
use cnft_client::{indexer::IndexerError, rpc::RpcError};
use cnft_concurrent_merkle_tree::errors::ConcurrentMerkleTreeError;
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Indexer error: {0}")]
    Indexer(#[from] IndexerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Keypair error: {0}")]
    Keypair(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tree error: {0}")]
    Tree(#[from] ConcurrentMerkleTreeError),

    #[error("Bubblegum error: {0}")]
    Bubblegum(#[from] BubblegumError),

    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    #[error("Tree {tree} cannot mint: {reason}")]
    CannotMint { tree: Pubkey, reason: String },

    #[error("Transaction {0} contains no leaf event")]
    LeafEventMissing(Signature),

    #[error("Leaf event of transaction {0} does not match the minted leaf")]
    LeafEventMismatch(Signature),

    #[error("Asset {asset_id} is owned by {owner}, not by {expected}")]
    AssetNotOwned {
        asset_id: Pubkey,
        owner: Pubkey,
        expected: Pubkey,
    },

    #[error("Asset {0} is burnt")]
    AssetBurnt(Pubkey),

    #[error("Proof of asset {asset_id} does not match its leaf: {reason}")]
    ProofMismatch { asset_id: Pubkey, reason: String },
}

impl DemoError {
    pub fn keypair<E: Display>(error: E) -> Self {
        Self::Keypair(error.to_string())
    }

    pub fn proof_mismatch(asset_id: &Pubkey, reason: impl Into<String>) -> Self {
        Self::ProofMismatch {
            asset_id: *asset_id,
            reason: reason.into(),
        }
    }
}

/// The steps of the workflow. Used to name the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Wallet,
    CreateTree,
    Mint,
    Transfer,
    Burn,
    FetchAsset,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Wallet => "Funding wallet",
            Phase::CreateTree => "Creating tree",
            Phase::Mint => "Minting compressed NFT",
            Phase::Transfer => "Transferring compressed NFT",
            Phase::Burn => "Burning compressed NFT",
            Phase::FetchAsset => "Fetching asset",
        };
        write!(f, "{}", name)
    }
}

/// Logs a failure of `phase` and hands the error back unchanged, for
/// `map_err` at the call site of each phase.
pub fn log_phase_error(phase: Phase) -> impl FnOnce(DemoError) -> DemoError {
    move |e| {
        error!("{} failed: {}", phase, e);
        e
    }
}
