// Ledger lifetime, assuming ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Fees

pub const BPS_DENOMINATOR: i128 = 10_000;
/// Cut taken by the treasury on every order execution (1%)
pub const PROTOCOL_FEE_BPS: i128 = 100;

// Time

pub const ONE_DAY: u64 = 86_400;
pub const ONE_WEEK: u64 = 7 * ONE_DAY;
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;
