//! Advent of Code puzzle solutions
//!
//! This crate contains actual puzzle solutions organized by year. Every day
//! module exposes `part1` and `part2` as plain functions; [`register_all`]
//! wires them into a registry builder, years ascending, days ascending.

use aoc_registry::{RegistrationError, RegistryBuilder};

pub mod year_2025;

/// Register every solution in this crate with `builder`
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    year_2025::register(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_builds() {
        let registry = register_all(RegistryBuilder::new()).unwrap().build();
        assert!(registry.get(2025, 1).is_some());
    }
}
