use borsh::BorshSerialize;
use cnft_hasher::{errors::HasherError, Hasher, Sha256};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_instruction, system_program,
};

use crate::{
    errors::BubblegumError, pda::get_tree_config_address, state::MetadataArgs,
    BUBBLEGUM_PROGRAM_ID, SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, SPL_NOOP_PROGRAM_ID,
};

/// Anchor instruction discriminator, `sha256("global:<name>")[..8]`.
pub fn instruction_discriminator(name: &str) -> Result<[u8; 8], HasherError> {
    sighash("global", name)
}

/// Anchor account discriminator, `sha256("account:<Name>")[..8]`.
pub fn account_discriminator(name: &str) -> Result<[u8; 8], HasherError> {
    sighash("account", name)
}

fn sighash(namespace: &str, name: &str) -> Result<[u8; 8], HasherError> {
    let preimage = format!("{}:{}", namespace, name);
    let hash = Sha256::hash(preimage.as_bytes())?;
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    Ok(discriminator)
}

fn instruction_data<T: BorshSerialize>(name: &str, args: &T) -> Result<Vec<u8>, BubblegumError> {
    let mut data = instruction_discriminator(name)?.to_vec();
    args.serialize(&mut data)?;
    Ok(data)
}

#[derive(BorshSerialize)]
struct CreateTreeArgs {
    max_depth: u32,
    max_buffer_size: u32,
    public: Option<bool>,
}

#[derive(BorshSerialize)]
struct LeafUpdateArgs {
    root: [u8; 32],
    data_hash: [u8; 32],
    creator_hash: [u8; 32],
    nonce: u64,
    index: u32,
}

/// System instruction allocating the account of a concurrent Merkle tree.
/// The account must be owned by the account compression program, which
/// initializes it during `create_tree`.
pub fn create_tree_account(
    payer: &Pubkey,
    merkle_tree: &Pubkey,
    lamports: u64,
    space: usize,
) -> Instruction {
    system_instruction::create_account(
        payer,
        merkle_tree,
        lamports,
        space as u64,
        &SPL_ACCOUNT_COMPRESSION_PROGRAM_ID,
    )
}

#[derive(Debug, Clone)]
pub struct CreateTreeConfigInputs {
    pub payer: Pubkey,
    pub tree_creator: Pubkey,
    pub merkle_tree: Pubkey,
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub public: Option<bool>,
}

pub fn create_tree_config(inputs: CreateTreeConfigInputs) -> Result<Instruction, BubblegumError> {
    let (tree_config, _) = get_tree_config_address(&inputs.merkle_tree);
    let data = instruction_data(
        "create_tree",
        &CreateTreeArgs {
            max_depth: inputs.max_depth,
            max_buffer_size: inputs.max_buffer_size,
            public: inputs.public,
        },
    )?;
    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_config, false),
            AccountMeta::new(inputs.merkle_tree, false),
            AccountMeta::new(inputs.payer, true),
            AccountMeta::new_readonly(inputs.tree_creator, true),
            AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

#[derive(Debug, Clone)]
pub struct MintV1Inputs {
    pub payer: Pubkey,
    /// Tree creator or delegate, has to sign unless the tree is public.
    pub tree_authority: Pubkey,
    pub merkle_tree: Pubkey,
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub metadata: MetadataArgs,
}

pub fn mint_v1(inputs: MintV1Inputs) -> Result<Instruction, BubblegumError> {
    let (tree_config, _) = get_tree_config_address(&inputs.merkle_tree);
    // The only argument, `message`, serializes exactly like the metadata.
    let data = instruction_data("mint_v1", &inputs.metadata)?;
    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_config, false),
            AccountMeta::new_readonly(inputs.leaf_owner, false),
            AccountMeta::new_readonly(inputs.leaf_delegate, false),
            AccountMeta::new(inputs.merkle_tree, false),
            AccountMeta::new(inputs.payer, true),
            AccountMeta::new_readonly(inputs.tree_authority, true),
            AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

/// Leaf state a transfer or burn proves against the current root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafProofInputs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
    /// Proof path without the nodes stored in the canopy.
    pub proof: Vec<[u8; 32]>,
}

impl LeafProofInputs {
    fn args(&self) -> LeafUpdateArgs {
        LeafUpdateArgs {
            root: self.root,
            data_hash: self.data_hash,
            creator_hash: self.creator_hash,
            nonce: self.nonce,
            index: self.index,
        }
    }

    fn proof_accounts(&self) -> impl Iterator<Item = AccountMeta> + '_ {
        self.proof
            .iter()
            .map(|node| AccountMeta::new_readonly(Pubkey::new_from_array(*node), false))
    }
}

#[derive(Debug, Clone)]
pub struct TransferInputs {
    pub merkle_tree: Pubkey,
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub new_leaf_owner: Pubkey,
    /// Whether the owner (`true`) or the delegate (`false`) signs.
    pub owner_signs: bool,
    pub leaf: LeafProofInputs,
}

pub fn transfer(inputs: TransferInputs) -> Result<Instruction, BubblegumError> {
    let (tree_config, _) = get_tree_config_address(&inputs.merkle_tree);
    let data = instruction_data("transfer", &inputs.leaf.args())?;
    let mut accounts = vec![
        AccountMeta::new_readonly(tree_config, false),
        AccountMeta::new_readonly(inputs.leaf_owner, inputs.owner_signs),
        AccountMeta::new_readonly(inputs.leaf_delegate, !inputs.owner_signs),
        AccountMeta::new_readonly(inputs.new_leaf_owner, false),
        AccountMeta::new(inputs.merkle_tree, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    accounts.extend(inputs.leaf.proof_accounts());
    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts,
        data,
    })
}

#[derive(Debug, Clone)]
pub struct BurnInputs {
    pub merkle_tree: Pubkey,
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub owner_signs: bool,
    pub leaf: LeafProofInputs,
}

pub fn burn(inputs: BurnInputs) -> Result<Instruction, BubblegumError> {
    let (tree_config, _) = get_tree_config_address(&inputs.merkle_tree);
    let data = instruction_data("burn", &inputs.leaf.args())?;
    let mut accounts = vec![
        AccountMeta::new_readonly(tree_config, false),
        AccountMeta::new_readonly(inputs.leaf_owner, inputs.owner_signs),
        AccountMeta::new_readonly(inputs.leaf_delegate, !inputs.owner_signs),
        AccountMeta::new(inputs.merkle_tree, false),
        AccountMeta::new_readonly(SPL_NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    accounts.extend(inputs.leaf.proof_accounts());
    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts,
        data,
    })
}

/// Converts the leaf index reported by an indexer into the `u32` the program
/// expects.
pub fn leaf_index(node_or_leaf_index: u64) -> Result<u32, BubblegumError> {
    u32::try_from(node_or_leaf_index)
        .map_err(|_| BubblegumError::LeafIndexOverflow(node_or_leaf_index))
}
