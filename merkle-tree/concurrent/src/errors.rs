use cnft_hasher::errors::HasherError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConcurrentMerkleTreeError {
    #[error("Invalid depth, it has to be greater than 0")]
    DepthZero,
    #[error("Unsupported max depth {max_depth} and max buffer size {max_buffer_size} pair")]
    UnsupportedDepthBufferPair { max_depth: u32, max_buffer_size: u32 },
    #[error("Canopy depth {canopy_depth} must be smaller than max depth {max_depth}")]
    CanopyTooDeep { canopy_depth: u32, max_depth: u32 },
    #[error("Canopy depth {0} exceeds the maximum canopy depth supported in one transaction")]
    CanopyTooLarge(u32),
    #[error("Account data too small: expected at least {expected} bytes, got {actual}")]
    AccountTooSmall { expected: usize, actual: usize },
    #[error("Account is not an initialized concurrent Merkle tree (account type {0})")]
    InvalidAccountType(u8),
    #[error("Unsupported concurrent Merkle tree header version {0}")]
    UnsupportedHeaderVersion(u8),
    #[error("Account length {0} does not correspond to any canopy depth")]
    InvalidCanopySize(usize),
    #[error("Provided proof is larger than the depth of the tree.")]
    ProofTooLarge,
    #[error("Leaf index {0} is out of bounds for the tree")]
    LeafIndexOutOfBounds(u64),
    #[error("Invalid Merkle proof, expected root: {0:?}, the provided proof produces root: {1:?}")]
    InvalidProof([u8; 32], [u8; 32]),
    #[error("Failed to deserialize: {0}")]
    Deserialization(String),
    #[error("Hasher error: {0}")]
    Hasher(#[from] HasherError),
}
