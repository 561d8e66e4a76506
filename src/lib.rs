#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // AttackerStrategy lives in strategies
)]
pub mod arena;
pub mod pursuit;
pub mod strategies;
