use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{errors::BubblegumError, instruction::account_discriminator};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenProgramVersion {
    Original,
    Token2022,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    /// In percentages, NOT basis points.
    pub share: u8,
}

/// Metadata of a compressed NFT. Field order is the borsh layout Bubblegum
/// hashes into the leaf, do not reorder.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Royalty basis points that goes to creators in secondary sales (0-10000).
    pub seller_fee_basis_points: u16,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub token_program_version: TokenProgramVersion,
    pub creators: Vec<Creator>,
}

impl MetadataArgs {
    /// Non-fungible metadata with a single unverified creator receiving all
    /// royalties.
    pub fn new_non_fungible(
        name: impl Into<String>,
        symbol: impl Into<String>,
        uri: impl Into<String>,
        seller_fee_basis_points: u16,
        creator: Pubkey,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            uri: uri.into(),
            seller_fee_basis_points,
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: None,
            token_standard: Some(TokenStandard::NonFungible),
            collection: None,
            uses: None,
            token_program_version: TokenProgramVersion::Original,
            creators: vec![Creator {
                address: creator,
                verified: false,
                share: 100,
            }],
        }
    }

    pub fn validate_creator_shares(&self) -> Result<(), BubblegumError> {
        if self.creators.is_empty() {
            return Ok(());
        }
        let total: u32 = self.creators.iter().map(|c| u32::from(c.share)).sum();
        if total != 100 {
            return Err(BubblegumError::InvalidCreatorShares(total));
        }
        Ok(())
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecompressibleState {
    Enabled,
    Disabled,
}

/// Bubblegum `TreeConfig` account, the authority of a Merkle tree.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfigAccount {
    pub tree_creator: Pubkey,
    pub tree_delegate: Pubkey,
    pub total_mint_capacity: u64,
    pub num_minted: u64,
    pub is_public: bool,
    pub is_decompressible: DecompressibleState,
}

impl TreeConfigAccount {
    pub const NAME: &'static str = "TreeConfig";

    /// Deserializes the account data, checking the Anchor discriminator.
    /// Trailing bytes (fields added by newer program versions) are ignored.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self, BubblegumError> {
        if data.len() < 8 {
            return Err(BubblegumError::AccountTooSmall {
                expected: 8,
                actual: data.len(),
            });
        }
        let mut discriminator = [0u8; 8];
        discriminator.copy_from_slice(&data[..8]);
        if discriminator != account_discriminator(Self::NAME)? {
            return Err(BubblegumError::InvalidDiscriminator(discriminator));
        }
        let account = Self::deserialize(&mut &data[8..])?;
        Ok(account)
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.total_mint_capacity.saturating_sub(self.num_minted)
    }

    pub fn can_mint(&self, authority: &Pubkey) -> bool {
        self.is_public || self.tree_creator == *authority || self.tree_delegate == *authority
    }
}
