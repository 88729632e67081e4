use std::fmt::Debug;

use async_trait::async_trait;
use das_api::apis::{configuration::Configuration, default_api};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::indexer::{AssetProofWithContext, AssetWithLeaf, Indexer, IndexerError};

pub struct DasIndexer {
    configuration: Configuration,
}

impl DasIndexer {
    /// `url` may carry the provider's `api-key` query parameter.
    pub fn new(url: String) -> Self {
        Self {
            configuration: Configuration::new(url),
        }
    }

    pub fn url(&self) -> &str {
        &self.configuration.base_path
    }
}

impl Debug for DasIndexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DasIndexer")
            .field("base_path", &self.configuration.base_path)
            .finish()
    }
}

#[async_trait]
impl Indexer for DasIndexer {
    async fn get_asset(&self, asset_id: &Pubkey) -> Result<AssetWithLeaf, IndexerError> {
        debug!("getAsset {}", asset_id);
        let asset =
            default_api::get_asset_post(&self.configuration, &asset_id.to_string()).await?;
        AssetWithLeaf::try_from(asset)
    }

    async fn get_asset_proof(
        &self,
        asset_id: &Pubkey,
    ) -> Result<AssetProofWithContext, IndexerError> {
        debug!("getAssetProof {}", asset_id);
        let proof =
            default_api::get_asset_proof_post(&self.configuration, &asset_id.to_string()).await?;
        AssetProofWithContext::try_from(proof)
    }
}
