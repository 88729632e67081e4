//! Client-side view of the concurrent Merkle tree accounts owned by the SPL
//! account compression program.
//!
//! Nothing in this crate mutates a tree. It knows how big a tree account has
//! to be, how to read its header, how to check a proof path against a root
//! and how to decode the events the program emits through the noop program.

pub mod canopy;
pub mod config;
pub mod errors;
pub mod event;
pub mod hash;
pub mod header;

pub use cnft_hasher;
pub use config::{account_size, TreeConfig};
pub use header::ConcurrentMerkleTreeHeader;
