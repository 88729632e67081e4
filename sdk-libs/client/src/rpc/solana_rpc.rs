use std::{
    fmt::{Debug, Display, Formatter},
    future::Future,
    time::Duration,
};

use async_trait::async_trait;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcTransactionConfig};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::CompiledInstruction,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use solana_transaction_status::{
    option_serializer::OptionSerializer, UiInnerInstructions, UiInstruction,
    UiTransactionEncoding,
};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::rpc::{
    errors::RpcError,
    rpc_connection::{ExecutedInstruction, RpcConnection},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolanaRpcUrl {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
    Custom(String),
}

impl Display for SolanaRpcUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SolanaRpcUrl::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            SolanaRpcUrl::Testnet => "https://api.testnet.solana.com".to_string(),
            SolanaRpcUrl::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaRpcUrl::Localnet => "http://localhost:8899".to_string(),
            SolanaRpcUrl::Custom(url) => url.clone(),
        };
        write!(f, "{}", str)
    }
}

/// Bounds how long a confirmed result (airdrop, fetched transaction) is
/// waited for. Failed calls are not retried.
#[derive(Clone, Debug, Copy)]
pub struct ConfirmationConfig {
    pub max_polls: u32,
    pub interval: Duration,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        ConfirmationConfig {
            max_polls: 30,
            interval: Duration::from_secs(1),
        }
    }
}

pub struct SolanaRpcConnection {
    pub client: RpcClient,
    pub confirmation_config: ConfirmationConfig,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolanaRpcConnection {{ client: {:?} }}",
            self.client.url()
        )
    }
}

impl SolanaRpcConnection {
    pub fn new_with_confirmation<U: ToString>(
        url: U,
        commitment_config: Option<CommitmentConfig>,
        confirmation_config: Option<ConfirmationConfig>,
    ) -> Self {
        let commitment_config = commitment_config.unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self {
            client,
            confirmation_config: confirmation_config.unwrap_or_default(),
        }
    }

    /// Polls `operation` until it yields a value.
    async fn poll<F, Fut, T>(&self, description: &str, operation: F) -> Result<T, RpcError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Option<T>, RpcError>>,
    {
        let max_polls = self.confirmation_config.max_polls;
        for attempt in 1..=max_polls {
            if let Some(value) = operation().await? {
                return Ok(value);
            }
            debug!(
                "{} not confirmed yet, polling again in {:?} (attempt {}/{})",
                description, self.confirmation_config.interval, attempt, max_polls
            );
            sleep(self.confirmation_config.interval).await;
        }
        Err(RpcError::CustomError(format!(
            "{} not confirmed after {} polls",
            description, max_polls
        )))
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self
    where
        Self: Sized,
    {
        Self::new_with_confirmation(url, commitment_config, None)
    }

    fn get_url(&self) -> String {
        self.client.url()
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.client
            .get_account_with_commitment(&address, self.client.commitment())
            .map(|response| response.value)
            .map_err(RpcError::from)
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.client.get_balance(pubkey).map_err(RpcError::from)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .map_err(RpcError::from)
    }

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let signature = self.client.request_airdrop(to, lamports)?;
        self.poll("Airdrop", || async {
            let confirmed = self
                .client
                .confirm_transaction_with_commitment(&signature, self.client.commitment())?
                .value;
            Ok(confirmed.then_some(()))
        })
        .await?;
        Ok(signature)
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        self.client
            // Confirmed commitments land more reliably than finalized
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .map(|(blockhash, _)| blockhash)
            .map_err(RpcError::from)
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        self.client
            .send_and_confirm_transaction(&transaction)
            .map_err(RpcError::from)
    }

    async fn get_transaction_instructions(
        &self,
        signature: &Signature,
    ) -> Result<Vec<ExecutedInstruction>, RpcError> {
        let transaction = self
            .poll("Transaction", || async {
                let config = RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::Base64),
                    commitment: Some(self.client.commitment()),
                    max_supported_transaction_version: Some(0),
                };
                match self.client.get_transaction_with_config(signature, config) {
                    Ok(transaction) => Ok(Some(transaction)),
                    Err(e) => {
                        debug!("Transaction {} not available yet: {}", signature, e);
                        Ok(None)
                    }
                }
            })
            .await?;

        let meta = transaction.transaction.meta.as_ref().ok_or_else(|| {
            RpcError::CustomError("Transaction missing metadata information".to_string())
        })?;
        if meta.status.is_err() {
            return Err(RpcError::CustomError(
                "Transaction status indicates an error".to_string(),
            ));
        }
        let decoded_transaction = transaction
            .transaction
            .transaction
            .decode()
            .ok_or_else(|| RpcError::CustomError("Failed to decode transaction".to_string()))?;
        let inner_instructions = match &meta.inner_instructions {
            OptionSerializer::Some(i) => i.as_slice(),
            OptionSerializer::None | OptionSerializer::Skip => &[],
        };
        executed_instructions(
            decoded_transaction.message.static_account_keys(),
            decoded_transaction.message.instructions(),
            inner_instructions,
        )
    }
}

/// Resolves program ids and decodes instruction data in execution order.
/// Each outer instruction is followed by the inner instructions it invoked.
pub(crate) fn executed_instructions(
    account_keys: &[Pubkey],
    instructions: &[CompiledInstruction],
    inner_instructions: &[UiInnerInstructions],
) -> Result<Vec<ExecutedInstruction>, RpcError> {
    let program_id = |index: u8| {
        account_keys.get(index as usize).copied().ok_or_else(|| {
            RpcError::CustomError(format!("Program id index {} out of bounds", index))
        })
    };

    let mut executed = Vec::with_capacity(instructions.len());
    for (i, instruction) in instructions.iter().enumerate() {
        executed.push(ExecutedInstruction {
            program_id: program_id(instruction.program_id_index)?,
            data: instruction.data.clone(),
        });
        for ix in inner_instructions.iter().filter(|ix| ix.index as usize == i) {
            for ui_instruction in ix.instructions.iter() {
                match ui_instruction {
                    UiInstruction::Compiled(ui_compiled_instruction) => {
                        let data = bs58::decode(&ui_compiled_instruction.data)
                            .into_vec()
                            .map_err(|_| {
                                RpcError::CustomError(
                                    "Failed to decode instruction data".to_string(),
                                )
                            })?;
                        executed.push(ExecutedInstruction {
                            program_id: program_id(ui_compiled_instruction.program_id_index)?,
                            data,
                        });
                    }
                    UiInstruction::Parsed(_) => {
                        warn!("Skipping parsed inner instruction");
                    }
                }
            }
        }
    }
    Ok(executed)
}
