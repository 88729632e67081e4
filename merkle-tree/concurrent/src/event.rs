use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::errors::ConcurrentMerkleTreeError;

/// Payload the account compression program (and programs wrapping it, such
/// as Bubblegum) log through the noop program.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub enum AccountCompressionEvent {
    ChangeLog(ChangeLogEvent),
    ApplicationData(ApplicationDataEvent),
}

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub enum ChangeLogEvent {
    V1(ChangeLogEventV1),
}

/// Node of the Merkle path with an index representing the position in a
/// non-sparse Merkle tree.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Eq, PartialEq)]
pub struct PathNode {
    pub node: [u8; 32],
    pub index: u32,
}

/// Merkle path of a single leaf change. Indexers replay these to rebuild
/// the tree off-chain.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct ChangeLogEventV1 {
    /// Public key of the tree.
    pub id: Pubkey,
    /// Nodes of the changed path, leaf first.
    pub path: Vec<PathNode>,
    /// Number of successful operations on the on-chain tree.
    pub seq: u64,
    /// Index of the changed leaf.
    pub index: u32,
}

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub enum ApplicationDataEvent {
    V1(ApplicationDataEventV1),
}

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDataEventV1 {
    pub application_data: Vec<u8>,
}

impl AccountCompressionEvent {
    pub fn try_from_noop_data(data: &[u8]) -> Result<Self, ConcurrentMerkleTreeError> {
        Self::try_from_slice(data)
            .map_err(|e| ConcurrentMerkleTreeError::Deserialization(e.to_string()))
    }

    pub fn application_data(&self) -> Option<&[u8]> {
        match self {
            AccountCompressionEvent::ApplicationData(ApplicationDataEvent::V1(event)) => {
                Some(event.application_data.as_slice())
            }
            AccountCompressionEvent::ChangeLog(_) => None,
        }
    }
}
