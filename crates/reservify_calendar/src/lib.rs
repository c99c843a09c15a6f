// --- File: crates/reservify_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
