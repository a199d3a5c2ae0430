use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Vec};
use spirit::{constants::PROTOCOL_FEE_BPS, math::fee::split_fee, validate};

use crate::{
    controller::{
        order::{load_order, load_owned_order, validate_executable, validate_order_params},
        swap::execute_swap,
    },
    dca::DcaTrait,
    errors::ContractError,
    events::DcaEvents,
    msg::{ConfigResponse, ExecutionResponse, FeeEstimate},
    storage::{
        add_owner_order, get_config, get_order, get_orders_count, get_owner_orders,
        is_initialized, next_order_id, save_config, save_order, set_initialized, Config, Order,
    },
};

contractmeta!(
    key = "Description",
    val = "Recurring swap orders executed on a fixed period through the SpiritSwap router"
);

#[contract]
pub struct Dca;

#[contractimpl]
impl DcaTrait for Dca {
    fn initialize(
        env: Env,
        admin: Address,
        router: Address,
        treasury: Address,
    ) -> Result<(), ContractError> {
        if is_initialized(&env) {
            log!(&env, "DCA: Initialize: initializing contract twice is not allowed");
            return Err(ContractError::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            &Config {
                admin: admin.clone(),
                router: router.clone(),
                treasury: treasury.clone(),
            },
        );

        DcaEvents::initialize(&env, admin, router, treasury);

        Ok(())
    }

    fn update_config(
        env: Env,
        sender: Address,
        new_admin: Option<Address>,
        router: Option<Address>,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        let mut config = get_config(&env);
        ensure_admin(&env, &config, &sender)?;

        if let Some(new_admin) = new_admin {
            config.admin = new_admin;
        }
        if let Some(router) = router {
            config.router = router;
        }

        save_config(&env, &config);

        DcaEvents::update_config(&env, config.admin, config.router);

        Ok(())
    }

    fn update_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ContractError> {
        sender.require_auth();

        let mut config = get_config(&env);
        ensure_admin(&env, &config, &sender)?;

        config.treasury = treasury.clone();
        save_config(&env, &config);

        DcaEvents::update_treasury(&env, sender, treasury);

        Ok(())
    }

    fn create_order(
        env: Env,
        owner: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        amount_out_min: i128,
        period: u64,
    ) -> Result<u64, ContractError> {
        owner.require_auth();

        validate_order_params(&env, amount_in, amount_out_min, period)?;
        validate!(
            &env,
            token_in != token_out,
            ContractError::DuplicateToken,
            "DCA: Create order: TokenOut must be different."
        )?;

        let config = get_config(&env);
        let outcome = execute_swap(
            &env,
            &config,
            &owner,
            &token_in,
            &token_out,
            amount_in,
            amount_out_min,
        )?;

        let now = env.ledger().timestamp();
        let order = Order {
            id: next_order_id(&env)?,
            owner,
            token_in,
            token_out,
            amount_in,
            amount_out_min,
            period,
            last_execution: now,
            total_executions: 1,
            total_amount_in: outcome.amount_in,
            total_amount_out: outcome.amount_out,
            total_fees_paid: outcome.protocol_fee,
            stopped: false,
            created_at: now,
        };

        save_order(&env, &order);
        add_owner_order(&env, &order.owner, order.id);

        DcaEvents::create_order(&env, &order);

        Ok(order.id)
    }

    fn edit_order(
        env: Env,
        sender: Address,
        order_id: u64,
        amount_in: i128,
        amount_out_min: i128,
        period: u64,
    ) -> Result<(), ContractError> {
        sender.require_auth();

        let mut order = load_owned_order(&env, &sender, order_id)?;
        validate_order_params(&env, amount_in, amount_out_min, period)?;

        order.amount_in = amount_in;
        order.amount_out_min = amount_out_min;
        order.period = period;

        save_order(&env, &order);

        DcaEvents::edit_order(&env, &order);

        Ok(())
    }

    fn stop_order(env: Env, sender: Address, order_id: u64) -> Result<(), ContractError> {
        sender.require_auth();

        let mut order = load_owned_order(&env, &sender, order_id)?;
        order.stopped = true;
        save_order(&env, &order);

        DcaEvents::stop_order(&env, sender, order_id);

        Ok(())
    }

    fn restart_order(env: Env, sender: Address, order_id: u64) -> Result<(), ContractError> {
        sender.require_auth();

        let mut order = load_owned_order(&env, &sender, order_id)?;
        order.stopped = false;
        save_order(&env, &order);

        DcaEvents::restart_order(&env, sender, order_id);

        Ok(())
    }

    fn execute_order(env: Env, order_id: u64) -> Result<ExecutionResponse, ContractError> {
        let mut order = load_order(&env, order_id)?;

        let now = env.ledger().timestamp();
        validate_executable(&env, &order, now)?;

        let config = get_config(&env);
        let outcome = execute_swap(
            &env,
            &config,
            &order.owner,
            &order.token_in,
            &order.token_out,
            order.amount_in,
            order.amount_out_min,
        )?;

        order.record_execution(
            &env,
            now,
            outcome.protocol_fee,
            outcome.amount_in,
            outcome.amount_out,
        )?;
        save_order(&env, &order);

        DcaEvents::execute_order(
            &env,
            order.owner,
            order_id,
            outcome.protocol_fee,
            outcome.amount_in,
            outcome.amount_out,
            now,
        );

        Ok(ExecutionResponse {
            order_id,
            protocol_fee: outcome.protocol_fee,
            amount_in: outcome.amount_in,
            amount_out: outcome.amount_out,
            executed_at: now,
        })
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        get_config(&env).admin
    }

    fn query_treasury(env: Env) -> Address {
        get_config(&env).treasury
    }

    fn query_order(env: Env, order_id: u64) -> Result<Order, ContractError> {
        load_order(&env, order_id)
    }

    fn query_orders_count(env: Env) -> u64 {
        get_orders_count(&env)
    }

    fn query_orders_by_owner(env: Env, owner: Address, start: u32, limit: u32) -> Vec<Order> {
        let order_ids = get_owner_orders(&env, &owner);
        let end = start.saturating_add(limit).min(order_ids.len());

        let mut orders = Vec::new(&env);
        for index in start..end {
            if let Some(order) = get_order(&env, order_ids.get_unchecked(index)) {
                orders.push_back(order);
            }
        }
        orders
    }

    fn query_estimated_fees(env: Env, amount_in: i128) -> Result<FeeEstimate, ContractError> {
        let (protocol_fee, swap_amount) = split_fee(&env, amount_in, PROTOCOL_FEE_BPS)?;

        Ok(FeeEstimate {
            protocol_fee,
            swap_amount,
        })
    }

    fn query_is_executable(env: Env, order_id: u64) -> bool {
        match get_order(&env, order_id) {
            Some(order) => validate_executable(&env, &order, env.ledger().timestamp()).is_ok(),
            None => false,
        }
    }

    fn query_next_execution(env: Env, order_id: u64) -> Result<u64, ContractError> {
        Ok(load_order(&env, order_id)?.next_execution())
    }
}

fn ensure_admin(env: &Env, config: &Config, sender: &Address) -> Result<(), ContractError> {
    validate!(
        env,
        config.admin == *sender,
        ContractError::NotAuthorized,
        "DCA: You are not authorized!"
    )
}
