extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address, Env, IntoVal, Symbol,
};

use super::setup::{deploy_dca_contract, DcaTest};
use crate::{
    contract::{Dca, DcaClient},
    errors::ContractError,
    msg::ConfigResponse,
    storage::Config,
};

#[test]
fn initialize_dca_contract() {
    let t = DcaTest::setup();

    assert_eq!(
        t.dca.query_config(),
        ConfigResponse {
            config: Config {
                admin: t.admin.clone(),
                router: t.router.address.clone(),
                treasury: t.treasury.clone(),
            },
        }
    );
    assert_eq!(t.dca.query_admin(), t.admin);
    assert_eq!(t.dca.query_treasury(), t.treasury);
    assert_eq!(t.dca.query_orders_count(), 0);
}

#[test]
fn initializing_twice_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let router = Address::generate(&env);
    let treasury = Address::generate(&env);

    let dca = deploy_dca_contract(&env, &admin, &router, &treasury);

    assert_eq!(
        dca.try_initialize(&admin, &router, &treasury),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}

#[test]
fn querying_before_initialize_should_fail() {
    let env = Env::default();
    let dca = DcaClient::new(&env, &env.register(Dca, ()));

    assert_eq!(
        dca.try_query_config(),
        Err(Ok(soroban_sdk::Error::from_contract_error(
            ContractError::NotInitialized as u32
        )))
    );
}

#[test]
fn admin_updates_treasury() {
    let t = DcaTest::setup();

    t.dca.update_treasury(&t.admin, &t.trader);

    assert_eq!(
        t.env.auths(),
        std::vec![(
            t.admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    t.dca.address.clone(),
                    Symbol::new(&t.env, "update_treasury"),
                    (&t.admin, &t.trader).into_val(&t.env),
                )),
                sub_invocations: std::vec![],
            },
        )]
    );
    assert_eq!(t.dca.query_treasury(), t.trader);
}

#[test]
fn non_admin_cannot_update_treasury() {
    let t = DcaTest::setup();

    assert_eq!(
        t.dca.try_update_treasury(&t.user, &t.user),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(t.dca.query_treasury(), t.treasury);
}

#[test]
fn admin_updates_config() {
    let t = DcaTest::setup();
    let new_admin = Address::generate(&t.env);
    let new_router = Address::generate(&t.env);

    t.dca.update_config(&t.admin, &None, &Some(new_router.clone()));
    assert_eq!(t.dca.query_config().config.router, new_router);
    assert_eq!(t.dca.query_admin(), t.admin);

    t.dca.update_config(&t.admin, &Some(new_admin.clone()), &None);
    assert_eq!(t.dca.query_admin(), new_admin);

    // the previous admin lost its rights
    assert_eq!(
        t.dca.try_update_treasury(&t.admin, &t.trader),
        Err(Ok(ContractError::NotAuthorized))
    );
    t.dca.update_treasury(&new_admin, &t.trader);
    assert_eq!(t.dca.query_treasury(), t.trader);
}

#[test]
fn non_admin_cannot_update_config() {
    let t = DcaTest::setup();

    assert_eq!(
        t.dca.try_update_config(&t.user, &Some(t.user.clone()), &None),
        Err(Ok(ContractError::NotAuthorized))
    );
    assert_eq!(t.dca.query_admin(), t.admin);
}
