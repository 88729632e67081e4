use cnft_bubblegum::{
    instruction::{leaf_index, LeafProofInputs},
    leaf::LeafSchema,
};
use cnft_client::{
    indexer::{AssetWithLeaf, Indexer},
    rpc::RpcConnection,
};
use cnft_concurrent_merkle_tree::{
    canopy::{canopy_depth_from_account_len, truncate_proof},
    cnft_hasher::Keccak,
    hash::validate_proof,
    ConcurrentMerkleTreeHeader,
};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::errors::DemoError;

/// An asset together with the proof arguments a transfer or burn of it needs.
#[derive(Debug, Clone)]
pub struct LeafUpdate {
    pub asset: AssetWithLeaf,
    pub leaf: LeafProofInputs,
}

/// Fetches asset and proof from the indexer and checks them before anything is
/// submitted: the asset must be live and owned by `owner`, the leaf rebuilt
/// from the asset must be the proof's leaf, and the proof must lead to its
/// root. Nodes the tree keeps in its canopy are dropped from the proof.
pub async fn prepare_leaf_update<R: RpcConnection, I: Indexer>(
    rpc: &R,
    indexer: &I,
    owner: &Pubkey,
    asset_id: &Pubkey,
) -> Result<LeafUpdate, DemoError> {
    let asset = indexer.get_asset(asset_id).await?;
    if asset.burnt {
        return Err(DemoError::AssetBurnt(*asset_id));
    }
    if asset.owner != *owner {
        return Err(DemoError::AssetNotOwned {
            asset_id: *asset_id,
            owner: asset.owner,
            expected: *owner,
        });
    }

    let proof = indexer.get_asset_proof(asset_id).await?;
    if proof.tree != asset.tree {
        return Err(DemoError::proof_mismatch(
            asset_id,
            format!("proof is for tree {}, asset is in {}", proof.tree, asset.tree),
        ));
    }

    let schema = LeafSchema::new_v1(
        asset.id,
        asset.owner,
        asset.delegate,
        asset.leaf_id,
        asset.data_hash,
        asset.creator_hash,
    );
    if schema.hash()? != proof.leaf {
        return Err(DemoError::proof_mismatch(
            asset_id,
            "leaf hash differs from the indexer's leaf",
        ));
    }
    let index = proof.leaf_index()?;
    if index != asset.leaf_id {
        return Err(DemoError::proof_mismatch(
            asset_id,
            format!("proof is for leaf {}, asset is leaf {}", index, asset.leaf_id),
        ));
    }

    let tree_account = rpc
        .get_account(asset.tree)
        .await?
        .ok_or(DemoError::AccountNotFound(asset.tree))?;
    let header = ConcurrentMerkleTreeHeader::deserialize(&tree_account.data)?;
    if proof.proof.len() != header.max_depth() as usize {
        return Err(DemoError::proof_mismatch(
            asset_id,
            format!(
                "proof has {} nodes, tree depth is {}",
                proof.proof.len(),
                header.max_depth()
            ),
        ));
    }
    validate_proof::<Keccak>(&proof.root, &proof.leaf, index, &proof.proof)?;

    let canopy_depth = canopy_depth_from_account_len(&header, tree_account.data.len())?;
    let proof_path = truncate_proof(&proof.proof, canopy_depth)?;
    debug!(
        "Asset {} is leaf {} of tree {}, passing {} of {} proof nodes",
        asset_id,
        index,
        asset.tree,
        proof_path.len(),
        proof.proof.len()
    );

    let leaf = LeafProofInputs {
        root: proof.root,
        data_hash: asset.data_hash,
        creator_hash: asset.creator_hash,
        nonce: asset.leaf_id,
        index: leaf_index(index)?,
        proof: proof_path,
    };
    Ok(LeafUpdate { asset, leaf })
}
