use cnft_bubblegum::instruction::{burn as burn_instruction, BurnInputs};
use cnft_client::{indexer::Indexer, rpc::RpcConnection};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::info;

use crate::{errors::DemoError, leaf_update::prepare_leaf_update};

pub async fn burn<R: RpcConnection, I: Indexer>(
    rpc: &mut R,
    indexer: &I,
    owner: &Keypair,
    asset_id: &Pubkey,
) -> Result<Signature, DemoError> {
    let update = prepare_leaf_update(&*rpc, indexer, &owner.pubkey(), asset_id).await?;
    info!("Burning asset {} of {}", asset_id, owner.pubkey());
    let instruction = burn_instruction(BurnInputs {
        merkle_tree: update.asset.tree,
        leaf_owner: owner.pubkey(),
        leaf_delegate: update.asset.delegate,
        owner_signs: true,
        leaf: update.leaf,
    })?;
    let signature = rpc
        .create_and_send_transaction(&[instruction], &owner.pubkey(), &[owner])
        .await?;
    Ok(signature)
}
