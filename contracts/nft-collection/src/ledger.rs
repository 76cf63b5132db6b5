use soroban_sdk::{Address, Env};

use crate::errors::NftError;
use crate::storage::Storage;

/// Ownership tracking the collection delegates to: who holds which token,
/// how many each holder has, and who may move them.
pub trait OwnershipLedger {
    /// Returns the holder of `token_id`.
    fn owns(env: &Env, token_id: u64) -> Result<Address, NftError>;

    /// Number of tokens currently held by `holder`.
    fn balance(env: &Env, holder: &Address) -> u64;

    /// Whether `spender` may move `token_id` out of `holder`'s account.
    fn is_authorized(env: &Env, spender: &Address, holder: &Address, token_id: u64) -> bool;

    /// Records a freshly allocated `token_id` as held by `to`.
    fn record_mint(env: &Env, to: &Address, token_id: u64);

    /// Moves `token_id` from `from` to `to` and drops its approval.
    /// Callers check ownership and authorization first.
    fn transfer(env: &Env, from: &Address, to: &Address, token_id: u64);

    fn approve(env: &Env, approved: Option<&Address>, token_id: u64);

    fn approved(env: &Env, token_id: u64) -> Option<Address>;

    fn set_operator(env: &Env, holder: &Address, operator: &Address, approved: bool);

    fn is_operator(env: &Env, holder: &Address, operator: &Address) -> bool;
}

/// Storage-backed ledger.
pub struct Ledger;

impl OwnershipLedger for Ledger {
    fn owns(env: &Env, token_id: u64) -> Result<Address, NftError> {
        Storage::get_token_owner(env, token_id).ok_or(NftError::NonexistentToken { token_id })
    }

    fn balance(env: &Env, holder: &Address) -> u64 {
        Storage::get_balance(env, holder)
    }

    fn is_authorized(env: &Env, spender: &Address, holder: &Address, token_id: u64) -> bool {
        spender == holder
            || Storage::get_approved(env, token_id).as_ref() == Some(spender)
            || Storage::is_operator(env, holder, spender)
    }

    fn record_mint(env: &Env, to: &Address, token_id: u64) {
        Storage::set_token_owner(env, token_id, to);
        Storage::set_balance(env, to, Storage::get_balance(env, to) + 1);
    }

    fn transfer(env: &Env, from: &Address, to: &Address, token_id: u64) {
        Storage::remove_approved(env, token_id);
        if from == to {
            return;
        }
        Storage::set_balance(env, from, Storage::get_balance(env, from) - 1);
        Storage::set_balance(env, to, Storage::get_balance(env, to) + 1);
        Storage::set_token_owner(env, token_id, to);
    }

    fn approve(env: &Env, approved: Option<&Address>, token_id: u64) {
        match approved {
            Some(addr) => Storage::set_approved(env, token_id, addr),
            None => Storage::remove_approved(env, token_id),
        }
    }

    fn approved(env: &Env, token_id: u64) -> Option<Address> {
        Storage::get_approved(env, token_id)
    }

    fn set_operator(env: &Env, holder: &Address, operator: &Address, approved: bool) {
        Storage::set_operator(env, holder, operator, approved);
    }

    fn is_operator(env: &Env, holder: &Address, operator: &Address) -> bool {
        Storage::is_operator(env, holder, operator)
    }
}
