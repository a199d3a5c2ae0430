use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, SpiritResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> SpiritResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> SpiritResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> SpiritResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> SpiritResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> SpiritResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: addition overflow");
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> SpiritResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: subtraction overflow");
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> SpiritResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: multiplication overflow");
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> SpiritResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error: division by zero");
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u32);
checked_impl!(i128);

#[cfg(test)]
mod test {
    use crate::error::ErrorCode;
    use crate::math::safe_math::SafeMath;
    use soroban_sdk::Env;

    #[test]
    fn safe_add() {
        let env = Env::default();
        assert_eq!((1_i128).safe_add(1, &env).unwrap(), 2);
        assert_eq!((1_i128).safe_add(i128::MAX, &env), Err(ErrorCode::MathError));
        assert_eq!((u32::MAX).safe_add(1, &env), Err(ErrorCode::MathError));
        assert_eq!((u64::MAX).safe_add(1, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_sub() {
        let env = Env::default();
        assert_eq!((1_u64).safe_sub(1, &env).unwrap(), 0);
        assert_eq!((0_u32).safe_sub(1, &env), Err(ErrorCode::MathError));
        assert_eq!((0_u64).safe_sub(1, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_mul() {
        let env = Env::default();
        assert_eq!((8_i128).safe_mul(80, &env).unwrap(), 640);
        assert_eq!((2_i128).safe_mul(i128::MAX, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn safe_div() {
        let env = Env::default();
        assert_eq!((155_i128).safe_div(8, &env).unwrap(), 19);
        assert_eq!((160_i128).safe_div(8, &env).unwrap(), 20);
        assert_eq!((1_i128).safe_div(100, &env).unwrap(), 0);
        assert_eq!((1_i128).safe_div(0, &env), Err(ErrorCode::MathError));
    }
}
