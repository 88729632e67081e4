use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetCreator {
    pub address: String,
    pub share: u8,
    pub verified: bool,
}
