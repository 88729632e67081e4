use cnft_client::{indexer::Indexer, rpc::RpcConnection};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use tracing::info;

use crate::{
    burn::burn,
    config::DemoConfig,
    errors::{log_phase_error, DemoError, Phase},
    explorer::print_transaction,
    mint::{demo_metadata, mint, MintedAsset},
    transfer::transfer,
    tree::{create_tree, CreatedTree},
    wallet::{ensure_funded, Wallet, TREE},
};

pub const DEFAULT_URI: &str = "https://example.com/cnft/metadata.json";

#[derive(Debug, Clone)]
pub struct RunReport {
    pub tree: CreatedTree,
    pub minted: Vec<MintedAsset>,
    /// Transfer of the first minted asset to the recipient.
    pub transfer: Signature,
    /// Burn of the second minted asset.
    pub burn: Signature,
}

/// The whole workflow: create a tree, mint two compressed NFTs to the payer,
/// transfer the first one to `recipient` and burn the second one.
///
/// Every step waits for the previous one. The first failure is logged with
/// the step that failed and aborts the run. `tree_keypair` is stored in
/// `wallet` once the tree exists on chain.
pub async fn run<R: RpcConnection, I: Indexer>(
    rpc: &mut R,
    indexer: &I,
    config: &DemoConfig,
    wallet: &Wallet,
    payer: &Keypair,
    recipient: &Pubkey,
    tree_keypair: &Keypair,
) -> Result<RunReport, DemoError> {
    let cluster = &config.cluster;
    info!("Payer: {}, recipient: {}", payer.pubkey(), recipient);

    ensure_funded(rpc, &payer.pubkey(), &config.airdrop)
        .await
        .map_err(log_phase_error(Phase::Wallet))?;

    let tree = create_tree(rpc, payer, tree_keypair, &config.tree, config.public_tree)
        .await
        .map_err(log_phase_error(Phase::CreateTree))?;
    wallet
        .store(TREE, tree_keypair)
        .map_err(log_phase_error(Phase::CreateTree))?;
    print_transaction(cluster, "Tree created", &tree.signature);
    println!("Tree: {}", cluster.address_url(&tree.tree));

    let mut minted = Vec::with_capacity(2);
    for number in 1..=2 {
        let metadata = demo_metadata(
            format!("Demo cNFT #{}", number),
            DEFAULT_URI,
            payer.pubkey(),
        );
        let asset = mint(rpc, payer, &tree.tree, &payer.pubkey(), metadata)
            .await
            .map_err(log_phase_error(Phase::Mint))?;
        print_transaction(
            cluster,
            &format!("Minted asset {} (leaf {})", asset.asset_id, asset.nonce),
            &asset.signature,
        );
        minted.push(asset);
    }

    let transferred = &minted[0];
    let transfer = transfer(rpc, indexer, payer, &transferred.asset_id, recipient)
        .await
        .map_err(log_phase_error(Phase::Transfer))?;
    print_transaction(
        cluster,
        &format!("Transferred asset {} to {}", transferred.asset_id, recipient),
        &transfer,
    );

    let burnt = &minted[1];
    let burn = burn(rpc, indexer, payer, &burnt.asset_id)
        .await
        .map_err(log_phase_error(Phase::Burn))?;
    print_transaction(cluster, &format!("Burnt asset {}", burnt.asset_id), &burn);

    Ok(RunReport {
        tree,
        minted,
        transfer,
        burn,
    })
}
