use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::rpc::errors::RpcError;

/// Program id and data of one instruction executed by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedInstruction {
    pub program_id: Pubkey,
    pub data: Vec<u8>,
}

#[async_trait]
pub trait RpcConnection: Send + Sync + Debug + 'static {
    fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self
    where
        Self: Sized;

    fn get_url(&self) -> String;

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError>;
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError>;
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError>;

    /// Requests an airdrop and waits until it is confirmed.
    async fn airdrop_lamports(&mut self, to: &Pubkey, lamports: u64)
        -> Result<Signature, RpcError>;

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError>;

    /// Sends the transaction and waits until it is confirmed.
    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError>;

    async fn create_and_send_transaction<'a>(
        &'a mut self,
        instructions: &'a [Instruction],
        payer: &'a Pubkey,
        signers: &'a [&'a Keypair],
    ) -> Result<Signature, RpcError> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(payer), signers, blockhash);
        self.process_transaction(transaction).await
    }

    /// Instructions of a confirmed transaction in execution order. Each
    /// outer instruction is followed by the inner instructions it invoked.
    async fn get_transaction_instructions(
        &self,
        signature: &Signature,
    ) -> Result<Vec<ExecutedInstruction>, RpcError>;
}
