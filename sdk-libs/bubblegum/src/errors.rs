use cnft_concurrent_merkle_tree::errors::ConcurrentMerkleTreeError;
use cnft_hasher::errors::HasherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BubblegumError {
    #[error("Borsh error: {0}")]
    Borsh(#[from] std::io::Error),
    #[error("Hasher error: {0}")]
    Hasher(#[from] HasherError),
    #[error("Concurrent Merkle tree error: {0}")]
    ConcurrentMerkleTree(#[from] ConcurrentMerkleTreeError),
    #[error("Account data too small: expected at least {expected} bytes, got {actual}")]
    AccountTooSmall { expected: usize, actual: usize },
    #[error("Invalid account discriminator: {0:?}")]
    InvalidDiscriminator([u8; 8]),
    #[error("Creator shares must add up to 100, got {0}")]
    InvalidCreatorShares(u32),
    #[error("Leaf index {0} does not fit into u32")]
    LeafIndexOverflow(u64),
}
