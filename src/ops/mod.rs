pub mod agenda;
pub mod burndown;
pub mod compose;
pub mod filter;
pub mod gesture;
pub mod grouping;
pub mod lookup;
pub mod reports;
pub mod sacrifice;

#[cfg(test)]
pub(crate) mod fixtures;
