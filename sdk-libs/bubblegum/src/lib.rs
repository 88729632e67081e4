//! Client side of the Bubblegum compressed NFT program: PDAs, account and
//! metadata types, leaf hashing, instruction builders and the leaf events
//! the program logs through the noop program.

pub mod errors;
pub mod event;
pub mod instruction;
pub mod leaf;
pub mod pda;
pub mod state;

use solana_program::{pubkey, pubkey::Pubkey};

pub use errors::BubblegumError;

pub const BUBBLEGUM_PROGRAM_ID: Pubkey = pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");
pub const SPL_ACCOUNT_COMPRESSION_PROGRAM_ID: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");
pub const SPL_NOOP_PROGRAM_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");
