use std::{fs, path::PathBuf};

use cnft_client::rpc::RpcConnection;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, write_keypair_file, Keypair},
    signer::Signer,
};
use tracing::{debug, info};

use crate::{config::AirdropConfig, errors::DemoError};

pub const PAYER: &str = "payer";
pub const RECIPIENT: &str = "recipient";
/// The last tree created.
pub const TREE: &str = "tree";

/// Keypairs stored as Solana CLI JSON files, `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct Wallet {
    dir: PathBuf,
}

impl Wallet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    pub fn load(&self, name: &str) -> Result<Keypair, DemoError> {
        let path = self.path(name);
        if !path.exists() {
            return Err(DemoError::Keypair(format!(
                "keypair {} not found at {}",
                name,
                path.display()
            )));
        }
        read_keypair_file(&path).map_err(DemoError::keypair)
    }

    pub fn store(&self, name: &str, keypair: &Keypair) -> Result<(), DemoError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(name);
        write_keypair_file(keypair, &path).map_err(DemoError::keypair)?;
        debug!("Stored keypair {} at {}", name, path.display());
        Ok(())
    }

    pub fn load_or_create(&self, name: &str) -> Result<Keypair, DemoError> {
        if self.path(name).exists() {
            let keypair = self.load(name)?;
            debug!("Loaded keypair {}: {}", name, keypair.pubkey());
            return Ok(keypair);
        }
        let keypair = Keypair::new();
        self.store(name, &keypair)?;
        info!("Created keypair {}: {}", name, keypair.pubkey());
        Ok(keypair)
    }
}

/// Airdrops to `pubkey` when its balance is below the configured minimum.
/// Returns the balance afterwards.
pub async fn ensure_funded<R: RpcConnection>(
    rpc: &mut R,
    pubkey: &Pubkey,
    airdrop: &AirdropConfig,
) -> Result<u64, DemoError> {
    let balance = rpc.get_balance(pubkey).await?;
    if !airdrop.enabled || balance >= airdrop.min_balance {
        debug!("Balance of {}: {} lamports", pubkey, balance);
        return Ok(balance);
    }
    info!(
        "Balance of {} is {} lamports, requesting an airdrop of {} lamports",
        pubkey, balance, airdrop.lamports
    );
    let signature = rpc.airdrop_lamports(pubkey, airdrop.lamports).await?;
    debug!("Airdrop confirmed: {}", signature);
    Ok(rpc.get_balance(pubkey).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_create() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = Wallet::new(dir.path().join("keys"));

        let created = wallet.load_or_create(PAYER).unwrap();
        assert!(wallet.path(PAYER).exists());
        let loaded = wallet.load_or_create(PAYER).unwrap();
        assert_eq!(created.pubkey(), loaded.pubkey());

        let other = wallet.load_or_create(RECIPIENT).unwrap();
        assert_ne!(created.pubkey(), other.pubkey());
    }

    #[test]
    fn test_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = Wallet::new(dir.path());
        let first = Keypair::new();
        let second = Keypair::new();
        wallet.store(TREE, &first).unwrap();
        wallet.store(TREE, &second).unwrap();
        assert_eq!(wallet.load(TREE).unwrap().pubkey(), second.pubkey());
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = Wallet::new(dir.path());
        assert!(matches!(wallet.load(TREE), Err(DemoError::Keypair(_))));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let wallet = Wallet::new(dir.path());
        fs::write(wallet.path(PAYER), "not a keypair").unwrap();
        assert!(matches!(
            wallet.load_or_create(PAYER),
            Err(DemoError::Keypair(_))
        ));
    }
}
