//! Decimal output cleanup split into submodules

mod decimal;

pub use decimal::{clean, strip_dot_zero};

#[cfg(test)]
mod tests;
