pub mod indexer;
pub mod rpc;
