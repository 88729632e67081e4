use anyhow::Result;
use clap::Parser;
use cnft_client::{
    indexer::{DasIndexer, Indexer},
    rpc::{RpcConnection, SolanaRpcConnection},
};
use cnft_demo::{
    burn::burn,
    cli::{Cli, Commands},
    config::DemoConfig,
    errors::{log_phase_error, DemoError, Phase},
    explorer::print_transaction,
    mint::{demo_metadata, mint},
    run::run,
    telemetry::setup_telemetry,
    transfer::transfer,
    tree::create_tree,
    wallet::{ensure_funded, Wallet, PAYER, RECIPIENT, TREE},
};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair, signer::Signer};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_telemetry(cli.global.log_dir.as_deref());

    let tree_args = match &cli.command {
        Commands::Run(args) | Commands::CreateTree(args) => Some(args),
        _ => None,
    };
    let config = DemoConfig::from_args(&cli.global, tree_args)?;
    debug!("{:?}", config);

    let wallet = Wallet::new(config.keypair_dir.clone());
    let payer = wallet
        .load_or_create(PAYER)
        .map_err(log_phase_error(Phase::Wallet))?;
    let mut rpc = SolanaRpcConnection::new(
        config.rpc_url.clone(),
        Some(CommitmentConfig::confirmed()),
    );
    let indexer = DasIndexer::new(config.das_url.clone());
    info!(
        "RPC {}, indexer {}, payer {}",
        rpc.get_url(),
        indexer.url(),
        payer.pubkey()
    );
    let cluster = &config.cluster;

    match cli.command {
        Commands::Run(_) => {
            let recipient = wallet
                .load_or_create(RECIPIENT)
                .map_err(log_phase_error(Phase::Wallet))?;
            let tree_keypair = Keypair::new();
            let report = run(
                &mut rpc,
                &indexer,
                &config,
                &wallet,
                &payer,
                &recipient.pubkey(),
                &tree_keypair,
            )
            .await?;
            info!(
                "Done: tree {}, asset {} now owned by {}, asset {} burnt",
                report.tree.tree,
                report.minted[0].asset_id,
                recipient.pubkey(),
                report.minted[1].asset_id
            );
        }
        Commands::CreateTree(_) => {
            ensure_funded(&mut rpc, &payer.pubkey(), &config.airdrop)
                .await
                .map_err(log_phase_error(Phase::Wallet))?;
            let tree_keypair = Keypair::new();
            let created = create_tree(
                &mut rpc,
                &payer,
                &tree_keypair,
                &config.tree,
                config.public_tree,
            )
            .await
            .map_err(log_phase_error(Phase::CreateTree))?;
            wallet.store(TREE, &tree_keypair)?;
            print_transaction(cluster, "Tree created", &created.signature);
            println!("Tree: {}", cluster.address_url(&created.tree));
        }
        Commands::Mint(args) => {
            let tree = match args.tree {
                Some(tree) => tree,
                None => wallet.load(TREE)?.pubkey(),
            };
            let owner = args.owner.unwrap_or_else(|| payer.pubkey());
            ensure_funded(&mut rpc, &payer.pubkey(), &config.airdrop)
                .await
                .map_err(log_phase_error(Phase::Wallet))?;
            let metadata = demo_metadata(args.name, args.uri, payer.pubkey());
            let asset = mint(&mut rpc, &payer, &tree, &owner, metadata)
                .await
                .map_err(log_phase_error(Phase::Mint))?;
            print_transaction(
                cluster,
                &format!("Minted asset {} (leaf {})", asset.asset_id, asset.nonce),
                &asset.signature,
            );
        }
        Commands::Transfer(args) => {
            let to = match args.to {
                Some(to) => to,
                None => wallet.load_or_create(RECIPIENT)?.pubkey(),
            };
            ensure_funded(&mut rpc, &payer.pubkey(), &config.airdrop)
                .await
                .map_err(log_phase_error(Phase::Wallet))?;
            let signature = transfer(&mut rpc, &indexer, &payer, &args.asset_id, &to)
                .await
                .map_err(log_phase_error(Phase::Transfer))?;
            print_transaction(
                cluster,
                &format!("Transferred asset {} to {}", args.asset_id, to),
                &signature,
            );
        }
        Commands::Burn(args) => {
            ensure_funded(&mut rpc, &payer.pubkey(), &config.airdrop)
                .await
                .map_err(log_phase_error(Phase::Wallet))?;
            let signature = burn(&mut rpc, &indexer, &payer, &args.asset_id)
                .await
                .map_err(log_phase_error(Phase::Burn))?;
            print_transaction(
                cluster,
                &format!("Burnt asset {}", args.asset_id),
                &signature,
            );
        }
        Commands::Asset(args) => {
            let asset = indexer
                .get_asset(&args.asset_id)
                .await
                .map_err(DemoError::from)
                .map_err(log_phase_error(Phase::FetchAsset))?;
            println!("{:#?}", asset);
            if !asset.burnt {
                let proof = indexer
                    .get_asset_proof(&args.asset_id)
                    .await
                    .map_err(DemoError::from)
                    .map_err(log_phase_error(Phase::FetchAsset))?;
                println!("{:#?}", proof);
            }
            println!("Asset: {}", cluster.address_url(&args.asset_id));
        }
    }
    Ok(())
}
