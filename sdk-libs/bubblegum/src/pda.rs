use solana_program::pubkey::Pubkey;

use crate::BUBBLEGUM_PROGRAM_ID;

pub const ASSET_PREFIX: &[u8] = b"asset";

/// Tree config ("tree authority") PDA of a Merkle tree.
pub fn get_tree_config_address(merkle_tree: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &BUBBLEGUM_PROGRAM_ID)
}

/// Asset id of the leaf minted with the given `nonce`.
pub fn get_asset_id(merkle_tree: &Pubkey, nonce: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[ASSET_PREFIX, merkle_tree.as_ref(), &nonce.to_le_bytes()],
        &BUBBLEGUM_PROGRAM_ID,
    )
    .0
}
