use serde::{Deserialize, Serialize};

/// AssetProof : Merkle proof of a compressed asset as returned by `getAssetProof`
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetProof {
    /// Base58
    pub root: String,
    /// Sibling hashes from the leaf level up, base58
    pub proof: Vec<String>,
    /// Index of the leaf among all nodes of the tree (`2^depth + leaf_index`)
    pub node_index: u64,
    /// Base58
    pub leaf: String,
    /// Base58
    pub tree_id: String,
}
