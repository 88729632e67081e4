use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{
    config::{canopy_size, tree_size},
    errors::ConcurrentMerkleTreeError,
};

pub const CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1: usize = 2 + 54;

/// `CompressionAccountType::ConcurrentMerkleTree`.
pub const ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE: u8 = 1;

pub const HEADER_VERSION_V1: u8 = 0;

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentMerkleTreeHeaderDataV1 {
    /// Buffer of changelogs stored on-chain.
    pub max_buffer_size: u32,
    /// Depth of the SPL concurrent Merkle tree.
    pub max_depth: u32,
    /// Authority that validates the content of the trees. Typically a
    /// program PDA (Bubblegum's tree config for NFT trees).
    pub authority: Pubkey,
    /// Slot corresponding to when the Merkle tree was created.
    pub creation_slot: u64,
    pub is_batch_initialized: bool,
    pub _padding: [u8; 5],
}

/// Header at the start of every concurrent Merkle tree account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentMerkleTreeHeader {
    pub account_type: u8,
    pub data: ConcurrentMerkleTreeHeaderDataV1,
}

impl ConcurrentMerkleTreeHeader {
    pub fn deserialize(bytes: &[u8]) -> Result<Self, ConcurrentMerkleTreeError> {
        if bytes.len() < CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1 {
            return Err(ConcurrentMerkleTreeError::AccountTooSmall {
                expected: CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1,
                actual: bytes.len(),
            });
        }
        let account_type = bytes[0];
        if account_type != ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE {
            return Err(ConcurrentMerkleTreeError::InvalidAccountType(account_type));
        }
        let version = bytes[1];
        if version != HEADER_VERSION_V1 {
            return Err(ConcurrentMerkleTreeError::UnsupportedHeaderVersion(
                version,
            ));
        }
        let data = ConcurrentMerkleTreeHeaderDataV1::deserialize(
            &mut &bytes[2..CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1],
        )
        .map_err(|e| ConcurrentMerkleTreeError::Deserialization(e.to_string()))?;
        Ok(Self { account_type, data })
    }

    pub fn serialize(&self) -> std::io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1);
        bytes.push(self.account_type);
        bytes.push(HEADER_VERSION_V1);
        self.data.serialize(&mut bytes)?;
        Ok(bytes)
    }

    pub fn max_depth(&self) -> u32 {
        self.data.max_depth
    }

    pub fn max_buffer_size(&self) -> u32 {
        self.data.max_buffer_size
    }

    pub fn authority(&self) -> Pubkey {
        self.data.authority
    }

    /// Length of header and tree, i.e. the offset at which the canopy starts.
    pub fn tree_end(&self) -> usize {
        CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1
            + tree_size(self.max_depth() as usize, self.max_buffer_size() as usize)
    }

    /// Size the full account would have with the given canopy.
    pub fn account_size_with_canopy(&self, canopy_depth: u32) -> usize {
        self.tree_end() + canopy_size(canopy_depth as usize)
    }
}
