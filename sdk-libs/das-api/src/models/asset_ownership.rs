use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetOwnership {
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub delegated: bool,
    /// Unset when the owner is its own delegate
    #[serde(default)]
    pub delegate: Option<String>,
    #[serde(default)]
    pub ownership_model: String,
    pub owner: String,
}

impl AssetOwnership {
    pub fn new(owner: String) -> Self {
        Self {
            frozen: false,
            delegated: false,
            delegate: None,
            ownership_model: "single".to_string(),
            owner,
        }
    }
}
