use soroban_sdk::{Address, Env, Symbol};

use crate::storage::Order;

pub struct DcaEvents {}

impl DcaEvents {
    /// Emitted when the engine is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[router: Address, treasury: Address]`
    pub fn initialize(env: &Env, admin: Address, router: Address, treasury: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (router, treasury));
    }

    /// Emitted when the admin or the router changes
    ///
    /// - topics - `["update_config", admin: Address]`
    /// - data - `[router: Address]`
    pub fn update_config(env: &Env, admin: Address, router: Address) {
        let topics = (Symbol::new(env, "update_config"), admin);
        env.events().publish(topics, router);
    }

    /// Emitted when the fee recipient changes
    ///
    /// - topics - `["update_treasury", sender: Address]`
    /// - data - `[treasury: Address]`
    pub fn update_treasury(env: &Env, sender: Address, treasury: Address) {
        let topics = (Symbol::new(env, "update_treasury"), sender);
        env.events().publish(topics, treasury);
    }

    /// Emitted when an order is created and its first swap went through
    ///
    /// - topics - `["create_order", owner: Address, order_id: u64]`
    /// - data - `[token_in: Address, token_out: Address, amount_in: i128, amount_out_min: i128, period: u64]`
    pub fn create_order(env: &Env, order: &Order) {
        let topics = (Symbol::new(env, "create_order"), order.owner.clone(), order.id);
        env.events().publish(
            topics,
            (
                order.token_in.clone(),
                order.token_out.clone(),
                order.amount_in,
                order.amount_out_min,
                order.period,
            ),
        );
    }

    /// Emitted when an owner edits an order
    ///
    /// - topics - `["edit_order", owner: Address, order_id: u64]`
    /// - data - `[amount_in: i128, amount_out_min: i128, period: u64]`
    pub fn edit_order(env: &Env, order: &Order) {
        let topics = (Symbol::new(env, "edit_order"), order.owner.clone(), order.id);
        env.events()
            .publish(topics, (order.amount_in, order.amount_out_min, order.period));
    }

    /// - topics - `["stop_order", owner: Address]`
    /// - data - `order_id: u64`
    pub fn stop_order(env: &Env, owner: Address, order_id: u64) {
        let topics = (Symbol::new(env, "stop_order"), owner);
        env.events().publish(topics, order_id);
    }

    /// - topics - `["restart_order", owner: Address]`
    /// - data - `order_id: u64`
    pub fn restart_order(env: &Env, owner: Address, order_id: u64) {
        let topics = (Symbol::new(env, "restart_order"), owner);
        env.events().publish(topics, order_id);
    }

    /// Emitted when a keeper executes an order
    ///
    /// - topics - `["execute_order", owner: Address, order_id: u64]`
    /// - data - `[protocol_fee: i128, amount_in: i128, amount_out: i128, executed_at: u64]`
    pub fn execute_order(
        env: &Env,
        owner: Address,
        order_id: u64,
        protocol_fee: i128,
        amount_in: i128,
        amount_out: i128,
        executed_at: u64,
    ) {
        let topics = (Symbol::new(env, "execute_order"), owner, order_id);
        env.events()
            .publish(topics, (protocol_fee, amount_in, amount_out, executed_at));
    }
}
