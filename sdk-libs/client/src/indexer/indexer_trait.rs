use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::indexer::{AssetProofWithContext, AssetWithLeaf, IndexerError};

#[async_trait]
pub trait Indexer: Send + Sync + Debug + 'static {
    async fn get_asset(&self, asset_id: &Pubkey) -> Result<AssetWithLeaf, IndexerError>;

    async fn get_asset_proof(
        &self,
        asset_id: &Pubkey,
    ) -> Result<AssetProofWithContext, IndexerError>;
}
