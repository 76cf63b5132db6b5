#![cfg_attr(not(test), no_std)]
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, Env, String, Symbol,
};

mod errors;
mod ledger;
mod storage;
mod types;
mod uri;

pub use errors::{NftError, NftErrorCode};
pub use ledger::{Ledger, OwnershipLedger};
pub use types::{ApprovalEvent, ApprovalForAllEvent, OwnershipTransferredEvent, TransferEvent};
pub use uri::MAX_BASE_URI_LENGTH;

use storage::Storage;

const COLLECTION_NAME: &str = "NftCollection";
const COLLECTION_SYMBOL: &str = "NFTC";

#[contract]
pub struct NftCollection;

#[contractimpl]
impl NftCollection {
    /// Deploys the collection.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `base_uri` - Prefix of every token URI (max 200 bytes)
    /// * `initial_owner` - The address allowed to mint
    ///
    /// # Panics
    /// * `BaseUriTooLong` - If `base_uri` exceeds the maximum length
    pub fn __constructor(env: Env, base_uri: String, initial_owner: Address) {
        let len = base_uri.len();
        if len > MAX_BASE_URI_LENGTH {
            let err = NftError::BaseUriTooLong {
                len,
                limit: MAX_BASE_URI_LENGTH,
            };
            panic_with_error!(&env, NftErrorCode::from(err));
        }
        Storage::set_base_uri(&env, &base_uri);
        Storage::set_owner(&env, &initial_owner);
        log!(&env, "collection initialized", initial_owner);
    }

    /// Mints the next token to `to`. Only the collection owner can mint.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `caller` - The address invoking the mint; must be the collection owner
    /// * `to` - The initial holder of the new token
    ///
    /// # Returns
    /// The newly allocated token ID (the first mint returns 1)
    ///
    /// # Errors
    /// * `Unauthorized` - Caller is not the collection owner
    pub fn mint(env: Env, caller: Address, to: Address) -> Result<u64, NftErrorCode> {
        caller.require_auth();
        Self::require_owner(&env, &caller).map_err(NftErrorCode::from)?;

        let token_id = Storage::next_token_id(&env);
        Ledger::record_mint(&env, &to, token_id);

        let event = TransferEvent {
            from: None,
            to: to.clone(),
            token_id,
        };
        env.events()
            .publish((Symbol::new(&env, "Transfer"), token_id), event);
        log!(&env, "token minted", token_id, to);

        Ok(token_id)
    }

    /// Transfers `token_id` from `from` to `to`, authorized by the holder itself.
    ///
    /// # Errors
    /// * `NonexistentToken` - Token was never minted
    /// * `NotOwner` - `from` does not hold the token
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), NftErrorCode> {
        Self::transfer_from(env, from.clone(), from, to, token_id)
    }

    /// Transfers `token_id` from `from` to `to` on behalf of `spender`.
    ///
    /// `spender` must be the holder, the address approved for this token, or an
    /// operator of the holder. Any approval on the token is cleared.
    ///
    /// # Errors
    /// * `NonexistentToken` - Token was never minted
    /// * `NotOwner` - `from` does not hold the token
    /// * `Unauthorized` - `spender` is neither the holder nor approved
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftErrorCode> {
        spender.require_auth();
        let holder = Ledger::owns(&env, token_id).map_err(NftErrorCode::from)?;
        if holder != from {
            return Err(NftErrorCode::from(NftError::NotOwner { token_id }));
        }
        if !Ledger::is_authorized(&env, &spender, &from, token_id) {
            return Err(NftErrorCode::Unauthorized);
        }

        Ledger::transfer(&env, &from, &to, token_id);

        let event = TransferEvent {
            from: Some(from.clone()),
            to: to.clone(),
            token_id,
        };
        env.events()
            .publish((Symbol::new(&env, "Transfer"), token_id), event);
        log!(&env, "token transferred", token_id, from, to);

        Ok(())
    }

    /// Approves `approved` to transfer `token_id`, or clears the approval with `None`.
    /// The approver must hold the token or be an operator of its holder.
    pub fn approve(
        env: Env,
        approver: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), NftErrorCode> {
        approver.require_auth();
        let holder = Ledger::owns(&env, token_id).map_err(NftErrorCode::from)?;
        if approver != holder && !Ledger::is_operator(&env, &holder, &approver) {
            return Err(NftErrorCode::Unauthorized);
        }

        Ledger::approve(&env, approved.as_ref(), token_id);

        let event = ApprovalEvent {
            holder,
            approved,
            token_id,
        };
        env.events()
            .publish((Symbol::new(&env, "Approval"), token_id), event);

        Ok(())
    }

    /// Grants or revokes `operator` control over every token `holder` owns.
    pub fn set_approval_for_all(env: Env, holder: Address, operator: Address, approved: bool) {
        holder.require_auth();
        Ledger::set_operator(&env, &holder, &operator, approved);

        let event = ApprovalForAllEvent {
            holder: holder.clone(),
            operator,
            approved,
        };
        env.events()
            .publish((Symbol::new(&env, "ApprovalForAll"), holder), event);
    }

    /// Returns the address approved for `token_id`, if any.
    pub fn get_approved(env: Env, token_id: u64) -> Result<Option<Address>, NftErrorCode> {
        Ledger::owns(&env, token_id).map_err(NftErrorCode::from)?;
        Ok(Ledger::approved(&env, token_id))
    }

    pub fn is_approved_for_all(env: Env, holder: Address, operator: Address) -> bool {
        Ledger::is_operator(&env, &holder, &operator)
    }

    /// Returns the number of tokens held by `holder` (0 if none).
    pub fn balance_of(env: Env, holder: Address) -> u64 {
        Ledger::balance(&env, &holder)
    }

    /// Returns the holder of `token_id`.
    ///
    /// # Errors
    /// * `NonexistentToken` - Token was never minted
    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftErrorCode> {
        Ledger::owns(&env, token_id).map_err(NftErrorCode::from)
    }

    /// Returns the base URI followed by the decimal token ID.
    ///
    /// # Errors
    /// * `NonexistentToken` - Token was never minted
    pub fn token_uri(env: Env, token_id: u64) -> Result<String, NftErrorCode> {
        Ledger::owns(&env, token_id).map_err(NftErrorCode::from)?;
        let base_uri = Storage::get_base_uri(&env);
        Ok(uri::token_uri(&env, &base_uri, token_id))
    }

    /// Returns the total number of tokens minted so far.
    pub fn total_supply(env: Env) -> u64 {
        Storage::get_token_counter(&env)
    }

    /// Returns the collection owner (the address allowed to mint).
    pub fn owner(env: Env) -> Result<Address, NftErrorCode> {
        Storage::get_owner(&env).ok_or(NftErrorCode::Unauthorized)
    }

    /// Hands mint rights over to `new_owner`. Only the current owner can call this.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), NftErrorCode> {
        caller.require_auth();
        Self::require_owner(&env, &caller).map_err(NftErrorCode::from)?;
        Storage::set_owner(&env, &new_owner);

        let event = OwnershipTransferredEvent {
            previous_owner: caller,
            new_owner: new_owner.clone(),
        };
        env.events()
            .publish((Symbol::new(&env, "OwnershipTransferred"),), event);
        log!(&env, "ownership transferred", new_owner);

        Ok(())
    }

    pub fn base_uri(env: Env) -> String {
        Storage::get_base_uri(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, COLLECTION_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, COLLECTION_SYMBOL)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), NftError> {
        match Storage::get_owner(env) {
            Some(owner) if owner == *caller => Ok(()),
            _ => Err(NftError::Unauthorized),
        }
    }
}
