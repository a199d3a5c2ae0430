/// Returns `Ok(())` when the assertion holds, otherwise logs the reason and
/// returns the given error.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr, $($arg:tt)+) => {
        {
            if $assert {
                Ok(())
            } else {
                soroban_sdk::log!($env, $($arg)+);
                Err($err)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr, $env:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_add($struct, $value, $env)?
    }};
}
