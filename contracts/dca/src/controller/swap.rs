use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    log, token, vec, Address, Env, IntoVal, Symbol,
};
use spirit::{constants::PROTOCOL_FEE_BPS, math::fee::split_fee, validate};

use crate::{
    errors::ContractError,
    router::{RouterError, SwapRouterClient},
    storage::Config,
};

pub struct SwapOutcome {
    pub protocol_fee: i128,
    /// Input actually swapped, net of the protocol fee
    pub amount_in: i128,
    pub amount_out: i128,
}

/// Pulls `amount_in` of `token_in` from `owner` under the allowance they granted the
/// engine, sends the protocol fee to the treasury and swaps the remainder for
/// `token_out`, delivered straight to `owner`.
///
/// Any failure aborts the whole invocation, so a fee is never taken without a swap.
pub fn execute_swap(
    env: &Env,
    config: &Config,
    owner: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out_min: i128,
) -> Result<SwapOutcome, ContractError> {
    let engine = env.current_contract_address();
    let token_client = token::Client::new(env, token_in);

    validate!(
        env,
        token_client.balance(owner) >= amount_in,
        ContractError::InsufficientBalance,
        "DCA: Not enough balance."
    )?;
    validate!(
        env,
        token_client.allowance(owner, &engine) >= amount_in,
        ContractError::InsufficientAllowance,
        "DCA: Not enough allowance."
    )?;

    let (protocol_fee, swap_amount) = split_fee(env, amount_in, PROTOCOL_FEE_BPS)?;

    if protocol_fee > 0 {
        token_client.transfer_from(&engine, owner, &config.treasury, &protocol_fee);
    }
    token_client.transfer_from(&engine, owner, &engine, &swap_amount);

    let amount_out = route(
        env,
        &config.router,
        token_in,
        token_out,
        swap_amount,
        amount_out_min,
        owner,
    )?;

    Ok(SwapOutcome {
        protocol_fee,
        amount_in: swap_amount,
        amount_out,
    })
}

fn route(
    env: &Env,
    router: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out_min: i128,
    recipient: &Address,
) -> Result<i128, ContractError> {
    let engine = env.current_contract_address();

    // The router pulls the input from us, which is a nested call it cannot authorize alone
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token_in.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: vec![
                    env,
                    engine.clone().into_val(env),
                    router.clone().into_val(env),
                    amount_in.into_val(env),
                ],
            },
            sub_invocations: vec![env],
        }),
    ]);

    let path = vec![env, token_in.clone(), token_out.clone()];
    let router_client = SwapRouterClient::new(env, router);

    let result =
        router_client.try_swap_exact_input(&engine, &path, &amount_in, &amount_out_min, recipient);

    match result {
        Ok(Ok(amount_out)) => {
            validate!(
                env,
                amount_out >= amount_out_min,
                ContractError::SlippageExceeded,
                "DCA: Too little received"
            )?;
            Ok(amount_out)
        }
        Err(Ok(RouterError::TooLittleReceived)) => {
            log!(env, "DCA: Too little received");
            Err(ContractError::SlippageExceeded)
        }
        _ => {
            log!(env, "DCA: Swap failed");
            Err(ContractError::SwapFailed)
        }
    }
}
