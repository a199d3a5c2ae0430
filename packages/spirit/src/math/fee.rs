use soroban_sdk::{log, Env};

use crate::{
    constants::BPS_DENOMINATOR,
    error::{ErrorCode, SpiritResult},
    math::safe_math::SafeMath,
};

/// Splits `amount` into the fee taken at `fee_bps` (rounded down) and the remainder.
///
/// Returns `(fee, remainder)`.
pub fn split_fee(env: &Env, amount: i128, fee_bps: i128) -> SpiritResult<(i128, i128)> {
    if !(0..=BPS_DENOMINATOR).contains(&fee_bps) {
        log!(env, "Fee bps out of range", fee_bps);
        return Err(ErrorCode::InvalidFee);
    }

    let fee = amount.safe_mul(fee_bps, env)?.safe_div(BPS_DENOMINATOR, env)?;
    let remainder = amount.safe_sub(fee, env)?;

    Ok((fee, remainder))
}
