use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

/// Storage layer for the collection.
///
/// Collection-wide configuration lives in instance storage; per-token and
/// per-holder entries live in persistent storage.
pub struct Storage;

impl Storage {
    const OWNER_KEY: Symbol = symbol_short!("OWNER");
    const BASE_URI_KEY: Symbol = symbol_short!("BASEURI");
    const COUNTER_KEY: Symbol = symbol_short!("CNTR");
    const TOKEN_OWNER_KEY: Symbol = symbol_short!("TOWNER");
    const BALANCE_KEY: Symbol = symbol_short!("BAL");
    const APPROVED_KEY: Symbol = symbol_short!("APPR");
    const OPERATOR_KEY: Symbol = symbol_short!("OPER");

    // ========== Collection Config ==========

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&Self::OWNER_KEY, owner);
    }

    pub fn get_owner(env: &Env) -> Option<Address> {
        env.storage().instance().get(&Self::OWNER_KEY)
    }

    pub fn set_base_uri(env: &Env, base_uri: &String) {
        env.storage().instance().set(&Self::BASE_URI_KEY, base_uri);
    }

    pub fn get_base_uri(env: &Env) -> String {
        env.storage()
            .instance()
            .get(&Self::BASE_URI_KEY)
            .unwrap_or_else(|| String::from_str(env, ""))
    }

    // ========== Token Counter ==========

    /// Increments and returns the next token ID.
    pub fn next_token_id(env: &Env) -> u64 {
        let next = Self::get_token_counter(env) + 1;
        env.storage().instance().set(&Self::COUNTER_KEY, &next);
        next
    }

    /// Gets the current token counter (total minted).
    pub fn get_token_counter(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&Self::COUNTER_KEY)
            .unwrap_or(0)
    }

    // ========== Token Ownership ==========

    pub fn set_token_owner(env: &Env, token_id: u64, holder: &Address) {
        let key = Self::token_owner_key(token_id);
        env.storage().persistent().set(&key, holder);
    }

    pub fn get_token_owner(env: &Env, token_id: u64) -> Option<Address> {
        let key = Self::token_owner_key(token_id);
        env.storage().persistent().get(&key)
    }

    // ========== Balances ==========

    pub fn set_balance(env: &Env, holder: &Address, balance: u64) {
        let key = Self::balance_key(holder);
        env.storage().persistent().set(&key, &balance);
    }

    pub fn get_balance(env: &Env, holder: &Address) -> u64 {
        let key = Self::balance_key(holder);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    // ========== Approvals ==========

    pub fn set_approved(env: &Env, token_id: u64, approved: &Address) {
        let key = Self::approved_key(token_id);
        env.storage().persistent().set(&key, approved);
    }

    pub fn get_approved(env: &Env, token_id: u64) -> Option<Address> {
        let key = Self::approved_key(token_id);
        env.storage().persistent().get(&key)
    }

    pub fn remove_approved(env: &Env, token_id: u64) {
        let key = Self::approved_key(token_id);
        env.storage().persistent().remove(&key);
    }

    pub fn set_operator(env: &Env, holder: &Address, operator: &Address, approved: bool) {
        let key = Self::operator_key(holder, operator);
        if approved {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    pub fn is_operator(env: &Env, holder: &Address, operator: &Address) -> bool {
        let key = Self::operator_key(holder, operator);
        env.storage().persistent().get(&key).unwrap_or(false)
    }

    // ========== Key Helpers ==========

    fn token_owner_key(token_id: u64) -> (Symbol, u64) {
        (Self::TOKEN_OWNER_KEY, token_id)
    }

    fn balance_key(holder: &Address) -> (Symbol, Address) {
        (Self::BALANCE_KEY, holder.clone())
    }

    fn approved_key(token_id: u64) -> (Symbol, u64) {
        (Self::APPROVED_KEY, token_id)
    }

    fn operator_key(holder: &Address, operator: &Address) -> (Symbol, Address, Address) {
        (Self::OPERATOR_KEY, holder.clone(), operator.clone())
    }
}
