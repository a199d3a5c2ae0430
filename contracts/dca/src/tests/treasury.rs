use pretty_assertions::assert_eq;
use spirit::constants::ONE_WEEK;

use super::setup::{default_quote, jump, DcaTest};
use crate::msg::FeeEstimate;

#[test]
fn fee_goes_to_treasury_on_every_execution() {
    let t = DcaTest::setup();
    let order_id = t.create_weekly_order();
    assert_eq!(t.token_in.balance(&t.treasury), 100);

    jump(&t.env, ONE_WEEK);
    t.dca.execute_order(&order_id);
    assert_eq!(t.token_in.balance(&t.treasury), 200);
    assert_eq!(t.token_in.balance(&t.dca.address), 0);
}

#[test]
fn fee_follows_treasury_update() {
    let t = DcaTest::setup();
    let order_id = t.create_weekly_order();

    t.dca.update_treasury(&t.admin, &t.trader);

    jump(&t.env, ONE_WEEK);
    t.dca.execute_order(&order_id);

    // past fees stay where they were paid
    assert_eq!(t.token_in.balance(&t.treasury), 100);
    assert_eq!(t.token_in.balance(&t.trader), 100);
}

#[test]
fn fee_is_rounded_down() {
    let t = DcaTest::setup();
    t.dca.update_treasury(&t.admin, &t.trader);

    let order_id = t.dca.create_order(
        &t.user,
        &t.token_in.address,
        &t.token_out.address,
        &84_900,
        &0,
        &ONE_WEEK,
    );
    assert_eq!(t.token_in.balance(&t.trader), 849);
    assert_eq!(t.token_out.balance(&t.user), default_quote(84_051));

    t.dca.edit_order(&t.user, &order_id, &66_700, &0, &ONE_WEEK);
    jump(&t.env, ONE_WEEK);
    t.dca.execute_order(&order_id);

    assert_eq!(t.token_in.balance(&t.trader), 849 + 667);
    assert_eq!(t.dca.query_order(&order_id).total_fees_paid, 849 + 667);
}

#[test]
fn tiny_orders_pay_no_fee() {
    let t = DcaTest::setup();

    t.dca.create_order(
        &t.user,
        &t.token_in.address,
        &t.token_out.address,
        &99,
        &0,
        &ONE_WEEK,
    );

    assert_eq!(t.token_in.balance(&t.treasury), 0);
    assert_eq!(t.dca.query_order(&0).total_amount_in, 99);
}

#[test]
fn query_estimated_fees() {
    let t = DcaTest::setup();

    assert_eq!(
        t.dca.query_estimated_fees(&10_000),
        FeeEstimate {
            protocol_fee: 100,
            swap_amount: 9_900,
        }
    );
    assert_eq!(
        t.dca.query_estimated_fees(&150),
        FeeEstimate {
            protocol_fee: 1,
            swap_amount: 149,
        }
    );
}
