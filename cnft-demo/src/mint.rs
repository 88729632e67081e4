use cnft_bubblegum::{
    event::leaf_event_from_instructions,
    instruction::{mint_v1, MintV1Inputs},
    leaf::{hash_creators, hash_metadata},
    pda::{get_asset_id, get_tree_config_address},
    state::{MetadataArgs, TreeConfigAccount},
};
use cnft_client::rpc::RpcConnection;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::{debug, info};

use crate::errors::DemoError;

pub const SYMBOL: &str = "CNFT";
pub const SELLER_FEE_BASIS_POINTS: u16 = 500;

/// Metadata of the NFTs this tool mints: unverified `creator` with a 100%
/// share, 5% royalties.
pub fn demo_metadata(
    name: impl Into<String>,
    uri: impl Into<String>,
    creator: Pubkey,
) -> MetadataArgs {
    MetadataArgs::new_non_fungible(name, SYMBOL, uri, SELLER_FEE_BASIS_POINTS, creator)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedAsset {
    pub asset_id: Pubkey,
    pub nonce: u64,
    pub leaf_hash: [u8; 32],
    pub signature: Signature,
}

/// Mints a compressed NFT owned (and delegated) to `owner` into `tree`. The
/// payer signs as tree authority.
///
/// The minted leaf is read back from the leaf event Bubblegum logs through the
/// noop program and checked against the hashes of `metadata`.
pub async fn mint<R: RpcConnection>(
    rpc: &mut R,
    payer: &Keypair,
    tree: &Pubkey,
    owner: &Pubkey,
    metadata: MetadataArgs,
) -> Result<MintedAsset, DemoError> {
    metadata.validate_creator_shares()?;

    let (tree_config_address, _) = get_tree_config_address(tree);
    let account = rpc
        .get_account(tree_config_address)
        .await?
        .ok_or(DemoError::AccountNotFound(tree_config_address))?;
    let tree_config = TreeConfigAccount::try_from_account_data(&account.data)?;
    if tree_config.remaining_capacity() == 0 {
        return Err(DemoError::CannotMint {
            tree: *tree,
            reason: format!(
                "all {} leaves are minted",
                tree_config.total_mint_capacity
            ),
        });
    }
    if !tree_config.can_mint(&payer.pubkey()) {
        return Err(DemoError::CannotMint {
            tree: *tree,
            reason: format!(
                "{} is neither tree creator nor delegate of a private tree",
                payer.pubkey()
            ),
        });
    }

    let data_hash = hash_metadata(&metadata)?;
    let creator_hash = hash_creators(&metadata.creators)?;
    info!(
        "Minting {:?} to {} in tree {} (leaf {} of {})",
        metadata.name,
        owner,
        tree,
        tree_config.num_minted,
        tree_config.total_mint_capacity
    );

    let instruction = mint_v1(MintV1Inputs {
        payer: payer.pubkey(),
        tree_authority: payer.pubkey(),
        merkle_tree: *tree,
        leaf_owner: *owner,
        leaf_delegate: *owner,
        metadata,
    })?;
    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &[payer])
        .await?;

    let (program_ids, instructions): (Vec<Pubkey>, Vec<Vec<u8>>) = rpc
        .get_transaction_instructions(&signature)
        .await?
        .into_iter()
        .map(|instruction| (instruction.program_id, instruction.data))
        .unzip();
    let event = leaf_event_from_instructions(&program_ids, &instructions)
        .ok_or(DemoError::LeafEventMissing(signature))?;
    debug!("Leaf event: {:?}", event);

    let schema = &event.schema;
    if schema.data_hash() != data_hash
        || schema.creator_hash() != creator_hash
        || schema.owner() != *owner
        || schema.id() != get_asset_id(tree, schema.nonce())
        || schema.hash()? != event.leaf_hash
    {
        return Err(DemoError::LeafEventMismatch(signature));
    }

    Ok(MintedAsset {
        asset_id: event.asset_id(),
        nonce: event.nonce(),
        leaf_hash: event.leaf_hash,
        signature,
    })
}
