pub mod errors;
pub mod keccak;
pub mod sha256;
pub mod zero_bytes;

pub use keccak::Keccak;
pub use sha256::Sha256;

use crate::errors::HasherError;

pub const HASH_BYTES: usize = 32;

pub type Hash = [u8; HASH_BYTES];

pub trait Hasher {
    fn hash(val: &[u8]) -> Result<Hash, HasherError>;
    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError>;

    /// Hashes of empty subtrees, from the empty leaf (index 0) up to the
    /// root of an empty tree of the given `depth`.
    fn zero_bytes(depth: usize) -> Result<Vec<Hash>, HasherError>
    where
        Self: Sized,
    {
        zero_bytes::compute_zero_bytes::<Self>(depth)
    }
}
