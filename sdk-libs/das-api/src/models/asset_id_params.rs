use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetIdParams {
    /// Asset id, base58
    pub id: String,
}

impl AssetIdParams {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
