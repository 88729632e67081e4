use crate::{
    config::{canopy_size, MAX_CANOPY_DEPTH},
    errors::ConcurrentMerkleTreeError,
    header::ConcurrentMerkleTreeHeader,
};

/// Recovers the canopy depth of a tree from the length of its account.
pub fn canopy_depth_from_account_len(
    header: &ConcurrentMerkleTreeHeader,
    account_len: usize,
) -> Result<u32, ConcurrentMerkleTreeError> {
    let tree_end = header.tree_end();
    if account_len < tree_end {
        return Err(ConcurrentMerkleTreeError::AccountTooSmall {
            expected: tree_end,
            actual: account_len,
        });
    }
    let canopy_bytes = account_len - tree_end;
    (0..=MAX_CANOPY_DEPTH.min(header.max_depth()))
        .find(|depth| canopy_size(*depth as usize) == canopy_bytes)
        .ok_or(ConcurrentMerkleTreeError::InvalidCanopySize(account_len))
}

/// Drops the nodes of a full proof path that are cached in the canopy. The
/// proof is ordered from the leaf level up, so the cached nodes are the last
/// `canopy_depth` ones.
pub fn truncate_proof(
    proof: &[[u8; 32]],
    canopy_depth: u32,
) -> Result<Vec<[u8; 32]>, ConcurrentMerkleTreeError> {
    let canopy_depth = canopy_depth as usize;
    if canopy_depth > proof.len() {
        return Err(ConcurrentMerkleTreeError::ProofTooLarge);
    }
    Ok(proof[..proof.len() - canopy_depth].to_vec())
}
