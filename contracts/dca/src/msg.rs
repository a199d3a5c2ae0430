use soroban_sdk::contracttype;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeEstimate {
    /// Sent to the treasury
    pub protocol_fee: i128,
    /// Left to swap once the fee is taken
    pub swap_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionResponse {
    pub order_id: u64,
    pub protocol_fee: i128,
    pub amount_in: i128,
    pub amount_out: i128,
    pub executed_at: u64,
}
