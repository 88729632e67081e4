use sha3::{Digest, Keccak256};

use crate::{errors::HasherError, Hash, Hasher};

/// Keccak-256, the node and leaf hash of SPL account compression trees.
#[derive(Clone, Copy, Debug)]
pub struct Keccak;

impl Hasher for Keccak {
    fn hash(val: &[u8]) -> Result<Hash, HasherError> {
        Self::hashv(&[val])
    }

    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError> {
        let mut hasher = Keccak256::default();
        for val in vals {
            hasher.update(val);
        }
        Ok(hasher.finalize().into())
    }
}
