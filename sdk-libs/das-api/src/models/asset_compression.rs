use serde::{Deserialize, Serialize};

/// AssetCompression : Location and hashes of a compressed asset's leaf
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetCompression {
    #[serde(default)]
    pub eligible: bool,
    pub compressed: bool,
    /// Base58
    pub data_hash: String,
    /// Base58
    pub creator_hash: String,
    /// Base58 leaf hash
    pub asset_hash: String,
    /// Merkle tree address, base58
    pub tree: String,
    /// Sequence number of the last tree update the indexer has seen for this leaf
    pub seq: u64,
    /// Also the leaf nonce
    pub leaf_id: u64,
}
