use crate::{errors::HasherError, Hash, Hasher};

/// Deepest tree supported by SPL account compression.
pub const MAX_DEPTH: usize = 30;

/// Computes `z[0] = [0; 32]`, `z[i + 1] = H(z[i] || z[i])`.
pub fn compute_zero_bytes<H: Hasher>(depth: usize) -> Result<Vec<Hash>, HasherError> {
    if depth > MAX_DEPTH {
        return Err(HasherError::DepthTooLarge(depth, MAX_DEPTH));
    }
    let mut zero_bytes = Vec::with_capacity(depth + 1);
    let mut node = [0u8; 32];
    zero_bytes.push(node);
    for _ in 0..depth {
        node = H::hashv(&[&node, &node])?;
        zero_bytes.push(node);
    }
    Ok(zero_bytes)
}
