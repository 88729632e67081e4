use serde::{Deserialize, Serialize};

use crate::models::{AssetCompression, AssetContent, AssetCreator, AssetOwnership};

/// Asset : A digital asset as returned by `getAsset`
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset id, base58
    pub id: String,
    /// Standard of the asset, e.g. `V1_NFT`
    pub interface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<AssetContent>,
    /// Present for compressed assets only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<AssetCompression>,
    pub ownership: AssetOwnership,
    #[serde(default)]
    pub creators: Vec<AssetCreator>,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub burnt: bool,
}

impl Asset {
    pub fn new(id: String, interface: String, ownership: AssetOwnership) -> Self {
        Self {
            id,
            interface,
            content: None,
            compression: None,
            ownership,
            creators: Vec::new(),
            mutable: false,
            burnt: false,
        }
    }
}
