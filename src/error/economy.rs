use thiserror::Error;

/// Errors raised by economy operations.
///
/// All variants are expected, user-facing conditions. An operation that returns
/// one of these has made no mutation: validation happens inside the lock before
/// any balance is touched, and conditional updates fail closed.
#[derive(Error, Debug)]
pub enum EconomyError {
    /// Registration attempted for an existing profile.
    #[error("user {discord_id} is already registered")]
    AlreadyRegistered {
        /// Discord ID of the user
        discord_id: u64,
    },

    /// An operation referenced a profile that does not exist.
    #[error("user {discord_id} is not registered")]
    NotRegistered {
        /// Discord ID of the user
        discord_id: u64,
    },

    /// Wallet coins cannot cover the operation.
    #[error("insufficient coins: required {required}, available {available}")]
    InsufficientCoins {
        /// Coins the operation costs
        required: i64,
        /// Coins available at the time of the locked re-read
        available: i64,
    },

    /// Bank balance cannot cover the withdrawal.
    #[error("insufficient bank balance: required {required}, available {available}")]
    InsufficientBank {
        /// Amount requested
        required: i64,
        /// Bank balance available
        available: i64,
    },

    /// A non-positive amount was supplied.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// A draw purchase exceeded the per-purchase limit.
    #[error("purchase amount {requested} exceeds the limit of {max} draws")]
    PurchaseLimitExceeded {
        /// Number of draws requested
        requested: u32,
        /// Largest purchase allowed
        max: u32,
    },

    /// Coin transfer where sender and recipient are the same user.
    #[error("cannot transfer coins to yourself")]
    SelfTransfer,

    /// Equip attempted on a power instance the user does not own.
    #[error("power instance {user_power_id} is not owned by user {discord_id}")]
    PowerNotOwned {
        /// The owned-power row id that was requested
        user_power_id: i64,
        /// Discord ID of the requesting user
        discord_id: u64,
    },
}

impl EconomyError {
    /// Shortfall between the required and available amount, when the variant
    /// carries one. Used by callers to render precise messages.
    pub fn shortfall(&self) -> Option<i64> {
        match self {
            Self::InsufficientCoins {
                required,
                available,
            }
            | Self::InsufficientBank {
                required,
                available,
            } => Some(required - available),
            _ => None,
        }
    }
}
