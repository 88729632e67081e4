use cnft_bubblegum::instruction::{transfer as transfer_instruction, TransferInputs};
use cnft_client::{indexer::Indexer, rpc::RpcConnection};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::info;

use crate::{errors::DemoError, leaf_update::prepare_leaf_update};

/// Transfers a compressed NFT of `owner` to `new_owner`. The owner signs and
/// pays.
pub async fn transfer<R: RpcConnection, I: Indexer>(
    rpc: &mut R,
    indexer: &I,
    owner: &Keypair,
    asset_id: &Pubkey,
    new_owner: &Pubkey,
) -> Result<Signature, DemoError> {
    let update = prepare_leaf_update(&*rpc, indexer, &owner.pubkey(), asset_id).await?;
    info!(
        "Transferring asset {} from {} to {}",
        asset_id,
        owner.pubkey(),
        new_owner
    );
    let instruction = transfer_instruction(TransferInputs {
        merkle_tree: update.asset.tree,
        leaf_owner: owner.pubkey(),
        leaf_delegate: update.asset.delegate,
        new_leaf_owner: *new_owner,
        owner_signs: true,
        leaf: update.leaf,
    })?;
    let signature = rpc
        .create_and_send_transaction(&[instruction], &owner.pubkey(), &[owner])
        .await?;
    Ok(signature)
}
