use soroban_sdk::{contracttype, Address};

/// Emitted on every change of holder. `from` is `None` for a mint.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: Option<Address>,
    pub to: Address,
    pub token_id: u64,
}

/// Emitted when a single-token approval is set or cleared.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovalEvent {
    pub holder: Address,
    pub approved: Option<Address>,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovalForAllEvent {
    pub holder: Address,
    pub operator: Address,
    pub approved: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}
