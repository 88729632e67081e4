use cnft_hasher::Hasher;

use crate::errors::ConcurrentMerkleTreeError;

/// Returns the hash of the parent node based on the provided `node` (with its
/// `node_index`) and `sibling` (at level `sibling_index`).
pub fn compute_parent_node<H>(
    node: &[u8; 32],
    sibling: &[u8; 32],
    node_index: u64,
    sibling_index: usize,
) -> Result<[u8; 32], ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    let is_left = (node_index >> sibling_index) & 1 == 0;
    let parent = if is_left {
        H::hashv(&[node, sibling])?
    } else {
        H::hashv(&[sibling, node])?
    };
    Ok(parent)
}

/// Computes the root for the given `leaf` (with index `leaf_index`) and
/// `proof`. It doesn't perform the validation of the provided `proof`.
pub fn compute_root<H>(
    leaf: &[u8; 32],
    leaf_index: u64,
    proof: &[[u8; 32]],
) -> Result<[u8; 32], ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    if proof.len() < 64 && leaf_index >> proof.len() != 0 {
        return Err(ConcurrentMerkleTreeError::LeafIndexOutOfBounds(leaf_index));
    }
    let mut node = *leaf;
    for (j, sibling) in proof.iter().enumerate() {
        node = compute_parent_node::<H>(&node, sibling, leaf_index, j)?;
    }
    Ok(node)
}

/// Checks whether the given Merkle `proof` for the given `leaf` (with index
/// `leaf_index`) is valid. The proof is valid when computing parent node
/// hashes using the whole path of the proof gives the same result as the
/// given `root`.
pub fn validate_proof<H>(
    root: &[u8; 32],
    leaf: &[u8; 32],
    leaf_index: u64,
    proof: &[[u8; 32]],
) -> Result<(), ConcurrentMerkleTreeError>
where
    H: Hasher,
{
    let computed_root = compute_root::<H>(leaf, leaf_index, proof)?;
    if computed_root == *root {
        Ok(())
    } else {
        Err(ConcurrentMerkleTreeError::InvalidProof(*root, computed_root))
    }
}
