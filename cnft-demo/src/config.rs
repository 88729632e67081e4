use std::path::PathBuf;

use cnft_concurrent_merkle_tree::TreeConfig;

use crate::{
    cli::{GlobalArgs, TreeArgs},
    errors::DemoError,
    explorer::Cluster,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropConfig {
    pub enabled: bool,
    /// Requested when the balance is below `min_balance`.
    pub lamports: u64,
    pub min_balance: u64,
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub rpc_url: String,
    pub das_url: String,
    pub keypair_dir: PathBuf,
    pub tree: TreeConfig,
    pub public_tree: bool,
    pub airdrop: AirdropConfig,
    pub cluster: Cluster,
}

impl DemoConfig {
    /// Builds and validates the configuration. `tree_args` is only given by
    /// the subcommands that create a tree.
    pub fn from_args(
        global: &GlobalArgs,
        tree_args: Option<&TreeArgs>,
    ) -> Result<Self, DemoError> {
        let rpc_url = validate_url("rpc-url", &global.rpc_url)?;
        let das_url = match &global.das_url {
            Some(das_url) => validate_url("das-url", das_url)?,
            None => rpc_url.clone(),
        };

        let (tree, public_tree) = match tree_args {
            Some(args) => (
                TreeConfig {
                    max_depth: args.max_depth,
                    max_buffer_size: args.max_buffer_size,
                    canopy_depth: args.canopy_depth,
                },
                args.public_tree,
            ),
            None => (TreeConfig::default(), false),
        };
        tree.validate()?;

        let airdrop = AirdropConfig {
            enabled: !global.skip_airdrop,
            lamports: global.airdrop_lamports,
            min_balance: global.min_balance,
        };
        if airdrop.enabled && airdrop.lamports == 0 {
            return Err(DemoError::Config(
                "airdrop-lamports must be positive unless the airdrop is skipped".to_string(),
            ));
        }

        Ok(Self {
            cluster: Cluster::from_rpc_url(&rpc_url),
            rpc_url,
            das_url,
            keypair_dir: global.keypair_dir.clone(),
            tree,
            public_tree,
            airdrop,
        })
    }
}

fn validate_url(name: &str, value: &str) -> Result<String, DemoError> {
    let url = url::Url::parse(value)
        .map_err(|e| DemoError::Config(format!("invalid {} {:?}: {}", name, value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        scheme => Err(DemoError::Config(format!(
            "invalid {} {:?}: unsupported scheme {}",
            name, value, scheme
        ))),
    }
}
