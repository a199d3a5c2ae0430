use soroban_sdk::contracterror;
use spirit::error::ErrorCode;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    #[doc = "Period must be greater than 0."]
    InvalidPeriod = 4,
    #[doc = "AmountIn must be greater than 0."]
    InvalidAmount = 5,
    #[doc = "TokenOut must be different."]
    DuplicateToken = 6,
    #[doc = "Order does not exist."]
    OrderNotFound = 7,
    #[doc = "Order does not belong to user."]
    NotOwner = 8,
    #[doc = "Order is stopped."]
    OrderStopped = 9,
    #[doc = "Period not elapsed."]
    PeriodNotElapsed = 10,
    #[doc = "Not enough balance."]
    InsufficientBalance = 11,
    #[doc = "Not enough allowance."]
    InsufficientAllowance = 12,
    #[doc = "Too little received"]
    SlippageExceeded = 13,
    SwapFailed = 14,
    MathError = 15,
    InvalidFee = 16,
}

impl From<ErrorCode> for ContractError {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::MathError => ContractError::MathError,
            ErrorCode::InvalidFee => ContractError::InvalidFee,
        }
    }
}
