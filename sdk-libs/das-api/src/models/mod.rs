pub mod asset;
pub use self::asset::Asset;
pub mod asset_compression;
pub use self::asset_compression::AssetCompression;
pub mod asset_content;
pub use self::asset_content::{AssetContent, AssetMetadata};
pub mod asset_creator;
pub use self::asset_creator::AssetCreator;
pub mod asset_id_params;
pub use self::asset_id_params::AssetIdParams;
pub mod asset_ownership;
pub use self::asset_ownership::AssetOwnership;
pub mod asset_proof;
pub use self::asset_proof::AssetProof;
pub mod json_rpc;
pub use self::json_rpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
