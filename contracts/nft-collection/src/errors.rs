use soroban_sdk::contracterror;
use thiserror::Error;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftErrorCode {
    Unauthorized = 1,
    NonexistentToken = 2,
    NotOwner = 3,
    BaseUriTooLong = 4,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NftError {
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Nonexistent token: ID {token_id}")]
    NonexistentToken { token_id: u64 },
    #[error("Sender does not own token {token_id}")]
    NotOwner { token_id: u64 },
    #[error("Base URI too long: {len} bytes, limit {limit}")]
    BaseUriTooLong { len: u32, limit: u32 },
}

impl From<NftError> for NftErrorCode {
    fn from(err: NftError) -> Self {
        match err {
            NftError::Unauthorized => NftErrorCode::Unauthorized,
            NftError::NonexistentToken { .. } => NftErrorCode::NonexistentToken,
            NftError::NotOwner { .. } => NftErrorCode::NotOwner,
            NftError::BaseUriTooLong { .. } => NftErrorCode::BaseUriTooLong,
        }
    }
}
