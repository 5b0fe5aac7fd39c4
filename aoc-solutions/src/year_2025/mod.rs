//! Solutions for Advent of Code 2025

use aoc_registry::{RegistrationError, RegistryBuilder};

pub mod day_1;

pub(crate) fn register(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    builder.register(2025, 1, day_1::part1, day_1::part2)
}
