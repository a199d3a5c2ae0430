use soroban_sdk::{Address, Env, Vec};

use crate::{
    errors::ContractError,
    msg::{ConfigResponse, ExecutionResponse, FeeEstimate},
    storage::Order,
};

pub trait DcaTrait {
    fn initialize(
        env: Env,
        admin: Address,
        router: Address,
        treasury: Address,
    ) -> Result<(), ContractError>;

    // ################################################################
    //                             ADMIN
    // ################################################################

    /// Replaces the admin and/or the router. Only the admin may call it.
    fn update_config(
        env: Env,
        sender: Address,
        new_admin: Option<Address>,
        router: Option<Address>,
    ) -> Result<(), ContractError>;

    /// Replaces the fee recipient for every subsequent execution.
    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ContractError>;

    // ################################################################
    //                             OWNER
    // ################################################################

    /// Creates an order and performs its first swap right away.
    ///
    /// The owner must have approved the engine to spend `amount_in` of `token_in`.
    ///
    /// ### Errors
    /// * `InvalidPeriod` if `period` is 0
    /// * `InvalidAmount` if `amount_in` is not positive or `amount_out_min` is negative
    /// * `DuplicateToken` if `token_in` equals `token_out`
    /// * `SlippageExceeded` if the first swap returns less than `amount_out_min`
    fn create_order(
        env: Env,
        owner: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out_min: i128,
        period: u64,
    ) -> Result<u64, ContractError>;

    /// Overwrites the amount, slippage floor and period of an order, stopped or not.
    fn edit_order(
        env: Env,
        sender: Address,
        order_id: u64,
        amount_in: i128,
        amount_out_min: i128,
        period: u64,
    ) -> Result<(), ContractError>;

    fn stop_order(env: Env, sender: Address, order_id: u64) -> Result<(), ContractError>;

    /// Lets a stopped order be executed again. Does not swap and keeps the last
    /// execution time, so the period still counts from the last successful swap.
    fn restart_order(env: Env, sender: Address, order_id: u64) -> Result<(), ContractError>;

    // ################################################################
    //                             KEEPER
    // ################################################################

    /// Executes an order whose period has elapsed. Anyone may trigger it; tokens only
    /// move under the allowance the owner granted.
    fn execute_order(env: Env, order_id: u64) -> Result<ExecutionResponse, ContractError>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_treasury(env: Env) -> Address;

    fn query_order(env: Env, order_id: u64) -> Result<Order, ContractError>;

    fn query_orders_count(env: Env) -> u64;

    /// Orders of `owner` in creation order, skipping the first `start` and returning at
    /// most `limit`.
    fn query_orders_by_owner(env: Env, owner: Address, start: u32, limit: u32) -> Vec<Order>;

    fn query_estimated_fees(env: Env, amount_in: i128) -> Result<FeeEstimate, ContractError>;

    fn query_is_executable(env: Env, order_id: u64) -> bool;

    /// Timestamp from which the order's period has elapsed, whether or not it is stopped.
    fn query_next_execution(env: Env, order_id: u64) -> Result<u64, ContractError>;
}
