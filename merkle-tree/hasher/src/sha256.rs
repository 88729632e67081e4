use sha2::{Digest, Sha256 as Sha256Digest};

use crate::{errors::HasherError, Hash, Hasher};

#[derive(Clone, Copy, Debug)]
pub struct Sha256;

impl Hasher for Sha256 {
    fn hash(val: &[u8]) -> Result<Hash, HasherError> {
        Self::hashv(&[val])
    }

    fn hashv(vals: &[&[u8]]) -> Result<Hash, HasherError> {
        let mut hasher = Sha256Digest::default();
        for val in vals {
            hasher.update(val);
        }
        Ok(hasher.finalize().into())
    }
}
