use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cnft_client::rpc::SolanaRpcUrl;
use solana_sdk::pubkey::Pubkey;

use crate::run::DEFAULT_URI;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a tree, mint two compressed NFTs, transfer the first and burn
    /// the second.
    Run(TreeArgs),
    /// Create a new tree and remember it as the current one.
    CreateTree(TreeArgs),
    Mint(MintArgs),
    Transfer(TransferArgs),
    Burn(AssetArgs),
    /// Print an asset and its proof as seen by the indexer.
    Asset(AssetArgs),
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    #[arg(
        long,
        env = "CNFT_RPC_URL",
        default_value_t = SolanaRpcUrl::Devnet.to_string(),
        global = true
    )]
    pub rpc_url: String,

    /// Defaults to the RPC url, DAS providers serve both on one endpoint.
    #[arg(long, env = "CNFT_DAS_URL", global = true)]
    pub das_url: Option<String>,

    #[arg(long, env = "CNFT_KEYPAIR_DIR", default_value = ".local_keys", global = true)]
    pub keypair_dir: PathBuf,

    #[arg(
        long,
        env = "CNFT_AIRDROP_LAMPORTS",
        default_value = "1000000000",
        global = true
    )]
    pub airdrop_lamports: u64,

    #[arg(long, env = "CNFT_MIN_BALANCE", default_value = "500000000", global = true)]
    pub min_balance: u64,

    #[arg(long, env = "CNFT_SKIP_AIRDROP", global = true)]
    pub skip_airdrop: bool,

    #[arg(long, env = "CNFT_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct TreeArgs {
    #[arg(long, env = "CNFT_MAX_DEPTH", default_value = "14")]
    pub max_depth: u32,

    #[arg(long, env = "CNFT_MAX_BUFFER_SIZE", default_value = "64")]
    pub max_buffer_size: u32,

    #[arg(long, env = "CNFT_CANOPY_DEPTH", default_value = "0")]
    pub canopy_depth: u32,

    /// Allow anyone to mint into the tree.
    #[arg(long, env = "CNFT_PUBLIC_TREE")]
    pub public_tree: bool,
}

#[derive(Args, Clone, Debug)]
pub struct MintArgs {
    /// Defaults to the last tree created.
    #[arg(long)]
    pub tree: Option<Pubkey>,

    /// Defaults to the payer.
    #[arg(long)]
    pub owner: Option<Pubkey>,

    #[arg(long, default_value = "Demo cNFT")]
    pub name: String,

    #[arg(long, default_value = DEFAULT_URI)]
    pub uri: String,
}

#[derive(Args, Clone, Debug)]
pub struct TransferArgs {
    pub asset_id: Pubkey,

    /// Defaults to the recipient wallet.
    #[arg(long)]
    pub to: Option<Pubkey>,
}

#[derive(Args, Clone, Debug)]
pub struct AssetArgs {
    pub asset_id: Pubkey,
}
