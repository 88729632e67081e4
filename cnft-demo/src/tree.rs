use cnft_bubblegum::{
    instruction::{create_tree_account, create_tree_config, CreateTreeConfigInputs},
    pda::get_tree_config_address,
};
use cnft_client::rpc::RpcConnection;
use cnft_concurrent_merkle_tree::TreeConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::info;

use crate::errors::DemoError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTree {
    pub tree: Pubkey,
    pub tree_config: Pubkey,
    pub signature: Signature,
}

/// Allocates the tree account and initializes it through Bubblegum in one
/// transaction. The payer becomes the tree creator.
pub async fn create_tree<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    tree_keypair: &Keypair,
    config: &TreeConfig,
    public: bool,
) -> Result<CreatedTree, DemoError> {
    config.validate()?;
    let tree = tree_keypair.pubkey();
    let space = config.account_size();
    let lamports = rpc.get_minimum_balance_for_rent_exemption(space).await?;
    info!(
        "Creating tree {} (depth {}, buffer {}, canopy {}): {} bytes, {} lamports",
        tree, config.max_depth, config.max_buffer_size, config.canopy_depth, space, lamports
    );

    let instructions = [
        create_tree_account(&payer.pubkey(), &tree, lamports, space),
        create_tree_config(CreateTreeConfigInputs {
            payer: payer.pubkey(),
            tree_creator: payer.pubkey(),
            merkle_tree: tree,
            max_depth: config.max_depth,
            max_buffer_size: config.max_buffer_size,
            public: Some(public),
        })?,
    ];
    let signature = rpc
        .create_and_send_transaction(&instructions, &payer.pubkey(), &[payer, tree_keypair])
        .await?;

    Ok(CreatedTree {
        tree,
        tree_config: get_tree_config_address(&tree).0,
        signature,
    })
}
