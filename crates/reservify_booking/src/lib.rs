// --- File: crates/reservify_booking/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
pub mod messages;
pub mod token;
#[cfg(test)]
mod logic_test;
