#![no_std]

mod contract;
mod controller;
mod dca;
pub mod errors;
mod events;
pub mod msg;
pub mod router;
pub mod storage;

pub use contract::{Dca, DcaClient};
