mod base58;
pub mod das_indexer;
mod error;
mod indexer_trait;
mod types;

pub use base58::{decode_base58_to_fixed_array, decode_base58_to_pubkey};
pub use das_indexer::DasIndexer;
pub use error::IndexerError;
pub use indexer_trait::Indexer;
pub use types::{AssetProofWithContext, AssetWithLeaf};
