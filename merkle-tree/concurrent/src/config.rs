use crate::{errors::ConcurrentMerkleTreeError, header::CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1};

/// Canopies deeper than this do not fit the remaining accounts of a single
/// transaction anyway.
pub const MAX_CANOPY_DEPTH: u32 = 17;

/// (max depth, max buffer size) pairs the account compression program has
/// monomorphized tree implementations for.
pub const VALID_DEPTH_SIZE_PAIRS: [(u32, u32); 34] = [
    (3, 8),
    (5, 8),
    (6, 16),
    (7, 16),
    (8, 16),
    (9, 16),
    (10, 32),
    (11, 32),
    (12, 32),
    (13, 32),
    (14, 64),
    (14, 256),
    (14, 1024),
    (14, 2048),
    (15, 64),
    (16, 64),
    (17, 64),
    (18, 64),
    (19, 64),
    (20, 64),
    (20, 256),
    (20, 1024),
    (20, 2048),
    (24, 64),
    (24, 256),
    (24, 512),
    (24, 1024),
    (24, 2048),
    (26, 512),
    (26, 1024),
    (26, 2048),
    (30, 512),
    (30, 1024),
    (30, 2048),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub canopy_depth: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 14,
            max_buffer_size: 64,
            canopy_depth: 0,
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), ConcurrentMerkleTreeError> {
        if self.max_depth == 0 {
            return Err(ConcurrentMerkleTreeError::DepthZero);
        }
        if !VALID_DEPTH_SIZE_PAIRS.contains(&(self.max_depth, self.max_buffer_size)) {
            return Err(ConcurrentMerkleTreeError::UnsupportedDepthBufferPair {
                max_depth: self.max_depth,
                max_buffer_size: self.max_buffer_size,
            });
        }
        if self.canopy_depth >= self.max_depth {
            return Err(ConcurrentMerkleTreeError::CanopyTooDeep {
                canopy_depth: self.canopy_depth,
                max_depth: self.max_depth,
            });
        }
        if self.canopy_depth > MAX_CANOPY_DEPTH {
            return Err(ConcurrentMerkleTreeError::CanopyTooLarge(self.canopy_depth));
        }
        Ok(())
    }

    /// Number of leaves the tree can hold.
    pub fn capacity(&self) -> u64 {
        1u64 << self.max_depth
    }

    pub fn account_size(&self) -> usize {
        account_size(
            self.max_depth as usize,
            self.max_buffer_size as usize,
            self.canopy_depth as usize,
        )
    }
}

/// Size of one changelog entry or of the rightmost path: root/leaf, the
/// path, a `u32` index and 4 bytes of padding.
fn path_size(max_depth: usize) -> usize {
    32 + 32 * max_depth + 4 + 4
}

/// Size of the `ConcurrentMerkleTree<MAX_DEPTH, MAX_BUFFER_SIZE>` struct:
/// sequence number, active index and buffer size (`u64` each), the changelog
/// buffer and the rightmost proof.
pub fn tree_size(max_depth: usize, max_buffer_size: usize) -> usize {
    24 + (max_buffer_size + 1) * path_size(max_depth)
}

pub fn canopy_size(canopy_depth: usize) -> usize {
    if canopy_depth == 0 {
        0
    } else {
        ((1 << (canopy_depth + 1)) - 2) * 32
    }
}

pub fn account_size(max_depth: usize, max_buffer_size: usize, canopy_depth: usize) -> usize {
    CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1
        + tree_size(max_depth, max_buffer_size)
        + canopy_size(canopy_depth)
}
