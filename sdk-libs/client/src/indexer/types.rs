use das_api::models::{Asset, AssetProof};
use solana_sdk::pubkey::Pubkey;

use crate::indexer::{
    base58::{decode_base58_to_fixed_array, decode_base58_to_pubkey},
    IndexerError,
};

/// Compressed asset as seen by the indexer, with everything needed to
/// rebuild its leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWithLeaf {
    pub id: Pubkey,
    pub owner: Pubkey,
    /// The owner when no delegate is set.
    pub delegate: Pubkey,
    pub tree: Pubkey,
    /// Leaf index, equal to the nonce for Bubblegum v1 leaves.
    pub leaf_id: u64,
    pub seq: u64,
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub burnt: bool,
    pub name: Option<String>,
    pub uri: Option<String>,
}

impl TryFrom<Asset> for AssetWithLeaf {
    type Error = IndexerError;

    fn try_from(asset: Asset) -> Result<Self, Self::Error> {
        let compression = asset.compression.ok_or(IndexerError::MissingField {
            context: "getAsset",
            field: "compression",
        })?;
        if !compression.compressed {
            return Err(IndexerError::InvalidResponseData(format!(
                "asset {} is not compressed",
                asset.id
            )));
        }
        let owner = decode_base58_to_pubkey(&asset.ownership.owner)?;
        let delegate = match asset.ownership.delegate.as_deref() {
            Some(delegate) => decode_base58_to_pubkey(delegate)?,
            None => owner,
        };
        let (name, uri) = match asset.content {
            Some(content) => (
                content.metadata.map(|metadata| metadata.name),
                Some(content.json_uri).filter(|uri| !uri.is_empty()),
            ),
            None => (None, None),
        };
        Ok(Self {
            id: decode_base58_to_pubkey(&asset.id)?,
            owner,
            delegate,
            tree: decode_base58_to_pubkey(&compression.tree)?,
            leaf_id: compression.leaf_id,
            seq: compression.seq,
            data_hash: decode_base58_to_fixed_array(&compression.data_hash)?,
            creator_hash: decode_base58_to_fixed_array(&compression.creator_hash)?,
            burnt: asset.burnt,
            name,
            uri,
        })
    }
}

/// Merkle proof of a compressed asset's leaf against a recent root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetProofWithContext {
    pub root: [u8; 32],
    /// Full proof path, leaf level first.
    pub proof: Vec<[u8; 32]>,
    pub node_index: u64,
    pub leaf: [u8; 32],
    pub tree: Pubkey,
}

impl AssetProofWithContext {
    /// Leaf index derived from the node index, `node_index - 2^depth`.
    pub fn leaf_index(&self) -> Result<u64, IndexerError> {
        let depth = u32::try_from(self.proof.len())
            .ok()
            .filter(|depth| *depth < u64::BITS)
            .ok_or_else(|| {
                IndexerError::InvalidResponseData(format!(
                    "proof of length {} is too long",
                    self.proof.len()
                ))
            })?;
        self.node_index.checked_sub(1u64 << depth).ok_or_else(|| {
            IndexerError::InvalidResponseData(format!(
                "node index {} is not a leaf of a tree of depth {}",
                self.node_index, depth
            ))
        })
    }
}

impl TryFrom<AssetProof> for AssetProofWithContext {
    type Error = IndexerError;

    fn try_from(proof: AssetProof) -> Result<Self, Self::Error> {
        Ok(Self {
            root: decode_base58_to_fixed_array(&proof.root)?,
            proof: proof
                .proof
                .iter()
                .map(|node| decode_base58_to_fixed_array(node))
                .collect::<Result<Vec<_>, _>>()?,
            node_index: proof.node_index,
            leaf: decode_base58_to_fixed_array(&proof.leaf)?,
            tree: decode_base58_to_pubkey(&proof.tree_id)?,
        })
    }
}
