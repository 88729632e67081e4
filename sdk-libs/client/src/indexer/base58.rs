use solana_sdk::pubkey::Pubkey;

use crate::indexer::error::IndexerError;

pub fn decode_base58_to_fixed_array<const N: usize>(input: &str) -> Result<[u8; N], IndexerError> {
    let mut buffer = [0u8; N];
    let decoded_len = bs58::decode(input)
        .onto(&mut buffer)
        .map_err(|_| IndexerError::InvalidBase58(input.to_string()))?;

    if decoded_len != N {
        return Err(IndexerError::InvalidBase58(input.to_string()));
    }

    Ok(buffer)
}

pub fn decode_base58_to_pubkey(input: &str) -> Result<Pubkey, IndexerError> {
    decode_base58_to_fixed_array(input).map(Pubkey::new_from_array)
}
