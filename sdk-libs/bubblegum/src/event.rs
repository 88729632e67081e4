use borsh::{BorshDeserialize, BorshSerialize};
use cnft_concurrent_merkle_tree::event::AccountCompressionEvent;
use solana_program::pubkey::Pubkey;
use tracing::debug;

use crate::{
    leaf::{LeafSchema, Version},
    SPL_NOOP_PROGRAM_ID,
};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubblegumEventType {
    /// Marker for 0 data.
    Uninitialized,
    /// Leaf schema event.
    LeafSchemaEvent,
}

/// Application data Bubblegum logs for every mint, transfer and burn.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeafSchemaEvent {
    pub event_type: BubblegumEventType,
    pub version: Version,
    pub schema: LeafSchema,
    pub leaf_hash: [u8; 32],
}

impl LeafSchemaEvent {
    pub fn new(schema: LeafSchema, leaf_hash: [u8; 32]) -> Self {
        Self {
            event_type: BubblegumEventType::LeafSchemaEvent,
            version: schema.version(),
            schema,
            leaf_hash,
        }
    }

    pub fn asset_id(&self) -> Pubkey {
        self.schema.id()
    }

    pub fn nonce(&self) -> u64 {
        self.schema.nonce()
    }
}

/// Returns the first Bubblegum leaf event among the given (inner)
/// instructions of a transaction.
///
/// Only noop invocations are considered. Their data is an
/// [`AccountCompressionEvent`]; the leaf event is the payload of an
/// `ApplicationData` one. Changelog events and unrelated noop calls are
/// skipped.
pub fn leaf_event_from_instructions(
    program_ids: &[Pubkey],
    instructions: &[Vec<u8>],
) -> Option<LeafSchemaEvent> {
    instructions
        .iter()
        .zip(program_ids.iter())
        .filter(|(_, program_id)| **program_id == SPL_NOOP_PROGRAM_ID)
        .find_map(|(data, _)| {
            let event = match AccountCompressionEvent::try_from_noop_data(data) {
                Ok(event) => event,
                Err(e) => {
                    debug!("Skipping noop data which is not a compression event: {}", e);
                    return None;
                }
            };
            let application_data = event.application_data()?;
            match LeafSchemaEvent::try_from_slice(application_data) {
                Ok(leaf_event)
                    if leaf_event.event_type == BubblegumEventType::LeafSchemaEvent =>
                {
                    Some(leaf_event)
                }
                Ok(_) => None,
                Err(e) => {
                    debug!("Skipping application data which is not a leaf event: {}", e);
                    None
                }
            }
        })
}
