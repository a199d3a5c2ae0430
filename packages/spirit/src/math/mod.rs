pub mod fee;
pub mod safe_math;
