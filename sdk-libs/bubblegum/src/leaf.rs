use borsh::{BorshDeserialize, BorshSerialize};
use cnft_hasher::{Hasher, Keccak};
use solana_program::pubkey::Pubkey;

use crate::{
    errors::BubblegumError,
    state::{Creator, MetadataArgs},
};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    V1,
}

impl Version {
    /// Byte prefixed to the leaf preimage.
    pub fn to_bytes(&self) -> u8 {
        match self {
            Version::V1 => 1,
        }
    }
}

/// Content of a compressed NFT leaf. The leaf stored in the tree is
/// [`LeafSchema::hash`].
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum LeafSchema {
    V1 {
        id: Pubkey,
        owner: Pubkey,
        delegate: Pubkey,
        nonce: u64,
        data_hash: [u8; 32],
        creator_hash: [u8; 32],
    },
}

impl LeafSchema {
    pub fn new_v1(
        id: Pubkey,
        owner: Pubkey,
        delegate: Pubkey,
        nonce: u64,
        data_hash: [u8; 32],
        creator_hash: [u8; 32],
    ) -> Self {
        Self::V1 {
            id,
            owner,
            delegate,
            nonce,
            data_hash,
            creator_hash,
        }
    }

    pub fn version(&self) -> Version {
        match self {
            LeafSchema::V1 { .. } => Version::V1,
        }
    }

    pub fn id(&self) -> Pubkey {
        match self {
            LeafSchema::V1 { id, .. } => *id,
        }
    }

    pub fn owner(&self) -> Pubkey {
        match self {
            LeafSchema::V1 { owner, .. } => *owner,
        }
    }

    pub fn delegate(&self) -> Pubkey {
        match self {
            LeafSchema::V1 { delegate, .. } => *delegate,
        }
    }

    pub fn nonce(&self) -> u64 {
        match self {
            LeafSchema::V1 { nonce, .. } => *nonce,
        }
    }

    pub fn data_hash(&self) -> [u8; 32] {
        match self {
            LeafSchema::V1 { data_hash, .. } => *data_hash,
        }
    }

    pub fn creator_hash(&self) -> [u8; 32] {
        match self {
            LeafSchema::V1 { creator_hash, .. } => *creator_hash,
        }
    }

    pub fn hash(&self) -> Result<[u8; 32], BubblegumError> {
        let hash = match self {
            LeafSchema::V1 {
                id,
                owner,
                delegate,
                nonce,
                data_hash,
                creator_hash,
            } => Keccak::hashv(&[
                &[self.version().to_bytes()],
                id.as_ref(),
                owner.as_ref(),
                delegate.as_ref(),
                nonce.to_le_bytes().as_ref(),
                data_hash.as_ref(),
                creator_hash.as_ref(),
            ])?,
        };
        Ok(hash)
    }
}

/// `keccak(keccak(borsh(metadata)) || seller_fee_basis_points)`.
pub fn hash_metadata(metadata: &MetadataArgs) -> Result<[u8; 32], BubblegumError> {
    let metadata_args_hash = Keccak::hash(metadata.try_to_vec()?.as_slice())?;
    let data_hash = Keccak::hashv(&[
        &metadata_args_hash,
        &metadata.seller_fee_basis_points.to_le_bytes(),
    ])?;
    Ok(data_hash)
}

/// `keccak(address || verified || share)` over all creators.
pub fn hash_creators(creators: &[Creator]) -> Result<[u8; 32], BubblegumError> {
    let creator_data = creators
        .iter()
        .map(|c| [c.address.as_ref(), &[c.verified as u8], &[c.share]].concat())
        .collect::<Vec<_>>();
    let hash = Keccak::hashv(
        creator_data
            .iter()
            .map(|c| c.as_slice())
            .collect::<Vec<&[u8]>>()
            .as_slice(),
    )?;
    Ok(hash)
}
