use soroban_sdk::{contractclient, contracterror, Address, Env, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    #[doc = "Too little received"]
    TooLittleReceived = 1,
    InvalidPath = 2,
}

/// Swap router the engine routes every order through.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Swaps exactly `amount_in` of `path[0]`, pulled from `sender`, for `path[last]`
    /// delivered to `recipient`.
    ///
    /// ### Errors
    /// * `TooLittleReceived` if the realized output is below `amount_out_min`
    fn swap_exact_input(
        env: Env,
        sender: Address,
        path: Vec<Address>,
        amount_in: i128,
        amount_out_min: i128,
        recipient: Address,
    ) -> Result<i128, RouterError>;
}
