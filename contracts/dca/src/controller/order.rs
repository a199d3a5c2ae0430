use soroban_sdk::{log, Address, Env};
use spirit::validate;

use crate::{
    errors::ContractError,
    storage::{get_order, Order},
};

/// Checks the mutable parameters shared by `create_order` and `edit_order`.
pub fn validate_order_params(
    env: &Env,
    amount_in: i128,
    amount_out_min: i128,
    period: u64,
) -> Result<(), ContractError> {
    validate!(
        env,
        period > 0,
        ContractError::InvalidPeriod,
        "DCA: Period must be greater than 0."
    )?;
    validate!(
        env,
        amount_in > 0,
        ContractError::InvalidAmount,
        "DCA: AmountIn must be greater than 0."
    )?;
    validate!(
        env,
        amount_out_min >= 0,
        ContractError::InvalidAmount,
        "DCA: AmountOutMin must not be negative."
    )?;

    Ok(())
}

pub fn load_order(env: &Env, order_id: u64) -> Result<Order, ContractError> {
    get_order(env, order_id).ok_or_else(|| {
        log!(env, "DCA: Order does not exist.", order_id);
        ContractError::OrderNotFound
    })
}

/// Loads an order the `sender` is allowed to mutate.
pub fn load_owned_order(
    env: &Env,
    sender: &Address,
    order_id: u64,
) -> Result<Order, ContractError> {
    let order = load_order(env, order_id)?;

    validate!(
        env,
        order.owner == *sender,
        ContractError::NotOwner,
        "DCA: Order does not belong to user."
    )?;

    Ok(order)
}

/// Checks an order may be executed at `now`.
pub fn validate_executable(env: &Env, order: &Order, now: u64) -> Result<(), ContractError> {
    validate!(
        env,
        !order.stopped,
        ContractError::OrderStopped,
        "DCA: Order is stopped."
    )?;
    validate!(
        env,
        order.is_due(now),
        ContractError::PeriodNotElapsed,
        "DCA: Period not elapsed."
    )?;

    Ok(())
}
