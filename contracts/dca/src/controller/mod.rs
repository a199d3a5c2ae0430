pub mod order;
pub mod swap;
