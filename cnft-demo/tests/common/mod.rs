//! In-memory chain standing in for the Solana cluster and the DAS indexer.
//!
//! `FakeRpc` executes the system and Bubblegum instructions this crate
//! sends against a sparse Keccak tree. `DasResponder` answers `getAsset` and
//! `getAssetProof` from the same state.

#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use borsh::{BorshDeserialize, BorshSerialize};
use cnft_bubblegum::{
    event::LeafSchemaEvent,
    leaf::{hash_creators, hash_metadata, LeafSchema},
    pda::get_asset_id,
    state::{DecompressibleState, MetadataArgs, TreeConfigAccount},
    BUBBLEGUM_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
};
use cnft_client::rpc::{ExecutedInstruction, RpcConnection, RpcError};
use cnft_concurrent_merkle_tree::{
    canopy::canopy_depth_from_account_len,
    cnft_hasher::{Hasher, Keccak},
    event::{
        AccountCompressionEvent, ApplicationDataEvent, ApplicationDataEventV1, ChangeLogEvent,
        ChangeLogEventV1,
    },
    header::{ConcurrentMerkleTreeHeaderDataV1, ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE},
    ConcurrentMerkleTreeHeader,
};
use serde_json::{json, Value};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    system_program,
    transaction::Transaction,
};
use wiremock::{Request, Respond, ResponseTemplate};

// Discriminators as deployed by the Bubblegum program.
const CREATE_TREE: &[u8] = &[165, 83, 136, 142, 89, 202, 47, 220];
const MINT_V1: &[u8] = &[145, 98, 192, 118, 184, 147, 118, 104];
const TRANSFER: &[u8] = &[163, 52, 200, 231, 140, 3, 69, 186];
const BURN: &[u8] = &[116, 110, 29, 56, 107, 219, 42, 93];
const TREE_CONFIG_DISCRIMINATOR: [u8; 8] = [122, 245, 175, 248, 171, 34, 0, 207];

pub fn b58(bytes: [u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

#[derive(BorshDeserialize)]
struct CreateTreeArgs {
    max_depth: u32,
    max_buffer_size: u32,
    public: Option<bool>,
}

#[derive(BorshDeserialize)]
struct LeafUpdateArgs {
    root: [u8; 32],
    data_hash: [u8; 32],
    creator_hash: [u8; 32],
    nonce: u64,
    index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeAsset {
    pub id: Pubkey,
    pub owner: Pubkey,
    pub delegate: Pubkey,
    pub tree: Pubkey,
    pub nonce: u64,
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub name: String,
    pub uri: String,
    pub burnt: bool,
}

impl FakeAsset {
    fn schema(&self) -> LeafSchema {
        LeafSchema::new_v1(
            self.id,
            self.owner,
            self.delegate,
            self.nonce,
            self.data_hash,
            self.creator_hash,
        )
    }
}

/// Sparse tree, absent leaves are empty.
#[derive(Debug)]
pub struct FakeTree {
    pub depth: u32,
    pub canopy_depth: u32,
    pub leaves: BTreeMap<u64, [u8; 32]>,
    pub seq: u64,
    zero_bytes: Vec<[u8; 32]>,
}

impl FakeTree {
    fn new(depth: u32, canopy_depth: u32) -> Self {
        Self {
            depth,
            canopy_depth,
            leaves: BTreeMap::new(),
            seq: 0,
            zero_bytes: Keccak::zero_bytes(depth as usize).unwrap(),
        }
    }

    fn node(&self, level: u32, index: u64) -> [u8; 32] {
        let start = index << level;
        let end = (index + 1) << level;
        if self.leaves.range(start..end).next().is_none() {
            return self.zero_bytes[level as usize];
        }
        if level == 0 {
            return self.leaves[&index];
        }
        let left = self.node(level - 1, 2 * index);
        let right = self.node(level - 1, 2 * index + 1);
        Keccak::hashv(&[&left, &right]).unwrap()
    }

    pub fn root(&self) -> [u8; 32] {
        self.node(self.depth, 0)
    }

    pub fn leaf(&self, index: u64) -> [u8; 32] {
        self.leaves.get(&index).copied().unwrap_or([0u8; 32])
    }

    /// Full proof path, leaf level first.
    pub fn proof(&self, index: u64) -> Vec<[u8; 32]> {
        (0..self.depth)
            .map(|level| self.node(level, (index >> level) ^ 1))
            .collect()
    }
}

#[derive(Debug)]
pub struct Chain {
    pub accounts: HashMap<Pubkey, Account>,
    pub balances: HashMap<Pubkey, u64>,
    pub trees: HashMap<Pubkey, FakeTree>,
    pub assets: HashMap<Pubkey, FakeAsset>,
    pub transactions: Vec<Transaction>,
    pub executed: HashMap<Signature, Vec<ExecutedInstruction>>,
    pub airdrops: Vec<(Pubkey, u64)>,
    /// When unset, Bubblegum instructions log no leaf events.
    pub emit_leaf_events: bool,
    /// When set, the indexer serves a wrong leaf in proofs.
    pub tamper_proof_leaf: bool,
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            balances: HashMap::new(),
            trees: HashMap::new(),
            assets: HashMap::new(),
            transactions: Vec::new(),
            executed: HashMap::new(),
            airdrops: Vec::new(),
            emit_leaf_events: true,
            tamper_proof_leaf: false,
        }
    }
}

fn noop(event: AccountCompressionEvent) -> ExecutedInstruction {
    ExecutedInstruction {
        program_id: SPL_NOOP_PROGRAM_ID,
        data: event.try_to_vec().unwrap(),
    }
}

impl Chain {
    fn execute(
        &mut self,
        program_id: &Pubkey,
        accounts: &[Pubkey],
        data: &[u8],
    ) -> Result<Vec<ExecutedInstruction>, String> {
        if *program_id == system_program::ID {
            self.create_account(accounts, data)?;
            return Ok(Vec::new());
        }
        if *program_id != BUBBLEGUM_PROGRAM_ID {
            return Err(format!("unknown program {}", program_id));
        }
        let (discriminator, args) = data.split_at(8);
        match discriminator {
            CREATE_TREE => {
                self.create_tree(accounts, args)?;
                Ok(Vec::new())
            }
            MINT_V1 => self.mint(accounts, args),
            TRANSFER => self.update_leaf(accounts, args, true),
            BURN => self.update_leaf(accounts, args, false),
            _ => Err(format!("unknown instruction {:?}", discriminator)),
        }
    }

    fn create_account(&mut self, accounts: &[Pubkey], data: &[u8]) -> Result<(), String> {
        if data.len() != 52 || data[..4] != [0u8; 4] {
            return Err("not a create_account instruction".to_string());
        }
        let lamports = u64::from_le_bytes(data[4..12].try_into().unwrap());
        let space = u64::from_le_bytes(data[12..20].try_into().unwrap());
        let owner = Pubkey::try_from(&data[20..52]).unwrap();
        if self.accounts.contains_key(&accounts[1]) {
            return Err(format!("account {} already in use", accounts[1]));
        }
        let balance = self.balances.entry(accounts[0]).or_default();
        *balance = balance.saturating_sub(lamports);
        self.accounts.insert(
            accounts[1],
            Account {
                lamports,
                data: vec![0u8; space as usize],
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
        Ok(())
    }

    fn create_tree(&mut self, accounts: &[Pubkey], args: &[u8]) -> Result<(), String> {
        let args = CreateTreeArgs::try_from_slice(args).map_err(|e| e.to_string())?;
        let (tree_config, tree, creator) = (accounts[0], accounts[1], accounts[3]);
        let header = ConcurrentMerkleTreeHeader {
            account_type: ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE,
            data: ConcurrentMerkleTreeHeaderDataV1 {
                max_buffer_size: args.max_buffer_size,
                max_depth: args.max_depth,
                authority: tree_config,
                creation_slot: 1,
                is_batch_initialized: false,
                _padding: [0u8; 5],
            },
        };
        let account = self
            .accounts
            .get_mut(&tree)
            .ok_or(format!("tree account {} not allocated", tree))?;
        let canopy_depth =
            canopy_depth_from_account_len(&header, account.data.len()).map_err(|e| e.to_string())?;
        let header_bytes = header.serialize().unwrap();
        account.data[..header_bytes.len()].copy_from_slice(&header_bytes);

        let config = TreeConfigAccount {
            tree_creator: creator,
            tree_delegate: creator,
            total_mint_capacity: 1 << args.max_depth,
            num_minted: 0,
            is_public: args.public.unwrap_or(false),
            is_decompressible: DecompressibleState::Disabled,
        };
        self.store_tree_config(&tree_config, &config);
        self.trees
            .insert(tree, FakeTree::new(args.max_depth, canopy_depth));
        Ok(())
    }

    fn store_tree_config(&mut self, address: &Pubkey, config: &TreeConfigAccount) {
        let mut data = TREE_CONFIG_DISCRIMINATOR.to_vec();
        config.serialize(&mut data).unwrap();
        self.accounts.insert(
            *address,
            Account {
                lamports: 1_000_000,
                data,
                owner: BUBBLEGUM_PROGRAM_ID,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    fn leaf_event(&self, asset: &FakeAsset, tree: &FakeTree) -> Vec<ExecutedInstruction> {
        if !self.emit_leaf_events {
            return Vec::new();
        }
        let schema = asset.schema();
        let leaf_hash = schema.hash().unwrap();
        let event = LeafSchemaEvent::new(schema, leaf_hash);
        vec![
            noop(AccountCompressionEvent::ApplicationData(
                ApplicationDataEvent::V1(ApplicationDataEventV1 {
                    application_data: event.try_to_vec().unwrap(),
                }),
            )),
            noop(AccountCompressionEvent::ChangeLog(ChangeLogEvent::V1(
                ChangeLogEventV1 {
                    id: asset.tree,
                    path: Vec::new(),
                    seq: tree.seq,
                    index: asset.nonce as u32,
                },
            ))),
        ]
    }

    fn mint(
        &mut self,
        accounts: &[Pubkey],
        args: &[u8],
    ) -> Result<Vec<ExecutedInstruction>, String> {
        let metadata = MetadataArgs::try_from_slice(args).map_err(|e| e.to_string())?;
        let (tree_config_address, owner, delegate, tree, authority) =
            (accounts[0], accounts[1], accounts[2], accounts[3], accounts[5]);
        let account = self
            .accounts
            .get(&tree_config_address)
            .ok_or("tree config not initialized")?;
        let mut config =
            TreeConfigAccount::try_from_account_data(&account.data).map_err(|e| e.to_string())?;
        if !config.can_mint(&authority) {
            return Err(format!("{} may not mint", authority));
        }
        if config.remaining_capacity() == 0 {
            return Err("tree is full".to_string());
        }
        let nonce = config.num_minted;
        config.num_minted += 1;
        self.store_tree_config(&tree_config_address, &config);

        let asset = FakeAsset {
            id: get_asset_id(&tree, nonce),
            owner,
            delegate,
            tree,
            nonce,
            data_hash: hash_metadata(&metadata).unwrap(),
            creator_hash: hash_creators(&metadata.creators).unwrap(),
            name: metadata.name.clone(),
            uri: metadata.uri.clone(),
            burnt: false,
        };
        let fake_tree = self.trees.get_mut(&tree).ok_or("unknown tree")?;
        fake_tree
            .leaves
            .insert(nonce, asset.schema().hash().unwrap());
        fake_tree.seq += 1;

        let fake_tree = &self.trees[&tree];
        let events = self.leaf_event(&asset, fake_tree);
        self.assets.insert(asset.id, asset);
        Ok(events)
    }

    fn update_leaf(
        &mut self,
        accounts: &[Pubkey],
        args: &[u8],
        is_transfer: bool,
    ) -> Result<Vec<ExecutedInstruction>, String> {
        let args = LeafUpdateArgs::try_from_slice(args).map_err(|e| e.to_string())?;
        let (owner, delegate) = (accounts[1], accounts[2]);
        let (new_owner, tree, proof_start) = if is_transfer {
            (Some(accounts[3]), accounts[4], 8)
        } else {
            (None, accounts[3], 7)
        };
        let fake_tree = self.trees.get(&tree).ok_or("unknown tree")?;
        if args.root != fake_tree.root() {
            return Err("root mismatch".to_string());
        }
        let index = u64::from(args.index);
        let expected_proof: Vec<Pubkey> = fake_tree.proof(index)
            [..(fake_tree.depth - fake_tree.canopy_depth) as usize]
            .iter()
            .map(|node| Pubkey::new_from_array(*node))
            .collect();
        if accounts[proof_start..] != expected_proof[..] {
            return Err("invalid proof path".to_string());
        }

        let asset_id = get_asset_id(&tree, args.nonce);
        let previous = LeafSchema::new_v1(
            asset_id,
            owner,
            delegate,
            args.nonce,
            args.data_hash,
            args.creator_hash,
        );
        if previous.hash().unwrap() != fake_tree.leaf(index) {
            return Err("leaf mismatch".to_string());
        }

        let mut asset = self.assets.get(&asset_id).ok_or("unknown asset")?.clone();
        let fake_tree = self.trees.get_mut(&tree).ok_or("unknown tree")?;
        match new_owner {
            Some(new_owner) => {
                asset.owner = new_owner;
                asset.delegate = new_owner;
                fake_tree.leaves.insert(index, asset.schema().hash().unwrap());
            }
            None => {
                asset.burnt = true;
                fake_tree.leaves.remove(&index);
            }
        }
        fake_tree.seq += 1;

        let events = self.leaf_event(&asset, &self.trees[&tree]);
        self.assets.insert(asset_id, asset);
        Ok(events)
    }

    fn asset_json(&self, asset: &FakeAsset) -> Value {
        let tree = &self.trees[&asset.tree];
        json!({
            "interface": "V1_NFT",
            "id": asset.id.to_string(),
            "content": {
                "json_uri": asset.uri,
                "metadata": { "name": asset.name, "symbol": "CNFT" }
            },
            "compression": {
                "eligible": false,
                "compressed": true,
                "data_hash": b58(asset.data_hash),
                "creator_hash": b58(asset.creator_hash),
                "asset_hash": b58(tree.leaf(asset.nonce)),
                "tree": asset.tree.to_string(),
                "seq": tree.seq,
                "leaf_id": asset.nonce
            },
            "ownership": {
                "frozen": false,
                "delegated": asset.delegate != asset.owner,
                "delegate": (asset.delegate != asset.owner).then(|| asset.delegate.to_string()),
                "ownership_model": "single",
                "owner": asset.owner.to_string()
            },
            "mutable": true,
            "burnt": asset.burnt
        })
    }

    fn proof_json(&self, asset: &FakeAsset) -> Value {
        let tree = &self.trees[&asset.tree];
        let leaf = if self.tamper_proof_leaf {
            [9u8; 32]
        } else {
            tree.leaf(asset.nonce)
        };
        json!({
            "root": b58(tree.root()),
            "proof": tree.proof(asset.nonce).into_iter().map(b58).collect::<Vec<_>>(),
            "node_index": (1u64 << tree.depth) + asset.nonce,
            "leaf": b58(leaf),
            "tree_id": asset.tree.to_string()
        })
    }
}

#[derive(Debug, Clone)]
pub struct FakeRpc {
    pub chain: Arc<Mutex<Chain>>,
}

impl FakeRpc {
    pub fn with_chain(chain: Arc<Mutex<Chain>>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl RpcConnection for FakeRpc {
    fn new<U: ToString>(_url: U, _commitment_config: Option<CommitmentConfig>) -> Self {
        Self::with_chain(Arc::new(Mutex::new(Chain::default())))
    }

    fn get_url(&self) -> String {
        "http://fake".to_string()
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        Ok(self.chain.lock().unwrap().accounts.get(&address).cloned())
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        Ok(self
            .chain
            .lock()
            .unwrap()
            .balances
            .get(pubkey)
            .copied()
            .unwrap_or_default())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        Ok((data_len as u64 + 128) * 6_960)
    }

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let mut chain = self.chain.lock().unwrap();
        *chain.balances.entry(*to).or_default() += lamports;
        chain.airdrops.push((*to, lamports));
        Ok(Signature::new_unique())
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        Ok(Hash::new_unique())
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        transaction.verify()?;
        let signature = transaction.signatures[0];
        let message = &transaction.message;
        let mut chain = self.chain.lock().unwrap();
        let mut executed = Vec::new();
        for instruction in &message.instructions {
            let program_id = *instruction.program_id(&message.account_keys);
            let accounts: Vec<Pubkey> = instruction
                .accounts
                .iter()
                .map(|index| message.account_keys[*index as usize])
                .collect();
            executed.push(ExecutedInstruction {
                program_id,
                data: instruction.data.clone(),
            });
            let inner = chain
                .execute(&program_id, &accounts, &instruction.data)
                .map_err(RpcError::CustomError)?;
            executed.extend(inner);
        }
        chain.executed.insert(signature, executed);
        chain.transactions.push(transaction);
        Ok(signature)
    }

    async fn get_transaction_instructions(
        &self,
        signature: &Signature,
    ) -> Result<Vec<ExecutedInstruction>, RpcError> {
        self.chain
            .lock()
            .unwrap()
            .executed
            .get(signature)
            .cloned()
            .ok_or_else(|| RpcError::CustomError(format!("transaction {} not found", signature)))
    }
}

/// Answers DAS requests from the chain state.
pub struct DasResponder {
    pub chain: Arc<Mutex<Chain>>,
}

impl Respond for DasResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match request.body_json() {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };
        let chain = self.chain.lock().unwrap();
        let asset = body["params"]["id"]
            .as_str()
            .and_then(|id| Pubkey::from_str(id).ok())
            .and_then(|id| chain.assets.get(&id));
        let result = match (body["method"].as_str(), asset) {
            (Some("getAsset"), Some(asset)) => chain.asset_json(asset),
            (Some("getAssetProof"), Some(asset)) => chain.proof_json(asset),
            _ => {
                return ResponseTemplate::new(200).set_body_json(json!({
                    "jsonrpc": "2.0",
                    "id": body["id"],
                    "error": { "code": -32000, "message": "Asset not found" }
                }))
            }
        };
        ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": body["id"],
            "result": result
        }))
    }
}
