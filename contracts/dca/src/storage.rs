use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};
use spirit::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::SpiritResult,
    math::safe_math::SafeMath,
    safe_increment,
};

use crate::errors::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Config,
    OrdersCount,
    Order(u64),
    OwnerOrders(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    /// Router every order is swapped through
    pub router: Address,
    /// Recipient of the protocol fee
    pub treasury: Address,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "DCA: Config not set");
            panic_with_error!(env, ContractError::NotInitialized)
        });

    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Orders
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub owner: Address,
    pub token_in: Address,
    pub token_out: Address,
    /// Amount of `token_in` pulled from the owner on every execution, fee included
    pub amount_in: i128,
    /// Minimum `token_out` accepted from a single execution
    pub amount_out_min: i128,
    /// Minimum number of seconds between two executions
    pub period: u64,
    pub last_execution: u64,
    pub total_executions: u32,
    /// Swapped input, net of protocol fees
    pub total_amount_in: i128,
    pub total_amount_out: i128,
    pub total_fees_paid: i128,
    pub stopped: bool,
    pub created_at: u64,
}

impl Order {
    /// Whether `period` has elapsed since the last successful execution.
    pub fn is_due(&self, now: u64) -> bool {
        now.saturating_sub(self.last_execution) >= self.period
    }

    /// Earliest timestamp at which the order is due again.
    pub fn next_execution(&self) -> u64 {
        self.last_execution.saturating_add(self.period)
    }

    pub fn record_execution(
        &mut self,
        env: &Env,
        now: u64,
        protocol_fee: i128,
        amount_in: i128,
        amount_out: i128,
    ) -> SpiritResult {
        safe_increment!(self.total_executions, 1, env);
        safe_increment!(self.total_amount_in, amount_in, env);
        safe_increment!(self.total_amount_out, amount_out, env);
        safe_increment!(self.total_fees_paid, protocol_fee, env);
        self.last_execution = now;

        Ok(())
    }
}

pub fn save_order(env: &Env, order: &Order) {
    let key = DataKey::Order(order.id);
    env.storage().persistent().set(&key, order);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_order(env: &Env, order_id: u64) -> Option<Order> {
    let key = DataKey::Order(order_id);
    let order = env.storage().persistent().get::<_, Order>(&key);

    if order.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    order
}

pub fn get_orders_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::OrdersCount)
        .unwrap_or(0u64)
}

/// Reserves the next order id. Ids start at zero and are never reused.
pub fn next_order_id(env: &Env) -> Result<u64, ContractError> {
    let id = get_orders_count(env);
    let count = id.safe_add(1, env)?;

    env.storage().instance().set(&DataKey::OrdersCount, &count);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    Ok(id)
}

pub fn get_owner_orders(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnerOrders(owner.clone());
    match env.storage().persistent().get::<_, Vec<u64>>(&key) {
        Some(order_ids) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            order_ids
        }
        None => Vec::new(env),
    }
}

/// Appends to the owner's index. The index is never pruned, so it is read back in
/// pages through `query_orders_by_owner`.
pub fn add_owner_order(env: &Env, owner: &Address, order_id: u64) {
    let key = DataKey::OwnerOrders(owner.clone());
    let mut order_ids = get_owner_orders(env, owner);
    order_ids.push_back(order_id);

    env.storage().persistent().set(&key, &order_ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

#[cfg(test)]
mod test {
    use soroban_sdk::Env;

    use super::{get_orders_count, next_order_id, DataKey};
    use crate::{contract::Dca, errors::ContractError};

    #[test]
    fn order_ids_are_sequential() {
        let env = Env::default();
        let contract_id = env.register(Dca, ());

        env.as_contract(&contract_id, || {
            assert_eq!(next_order_id(&env), Ok(0));
            assert_eq!(next_order_id(&env), Ok(1));
            assert_eq!(get_orders_count(&env), 2);
        });
    }

    #[test]
    fn order_id_overflow_should_fail() {
        let env = Env::default();
        let contract_id = env.register(Dca, ());

        env.as_contract(&contract_id, || {
            env.storage()
                .instance()
                .set(&DataKey::OrdersCount, &u64::MAX);

            assert_eq!(next_order_id(&env), Err(ContractError::MathError));
            assert_eq!(get_orders_count(&env), u64::MAX);
        });
    }
}
