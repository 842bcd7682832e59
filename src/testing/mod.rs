//! Generators and reference solutions shared by unit tests.

pub mod brute_force;
pub mod random_frequencies;
