//! Shared test fixtures for railclimb crates.
//!
//! This crate provides data builders and reference oracles for testing.
//! It does NOT depend on `railclimb-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`oracle`] - Brute-force minimum partition over every split
//! - [`forces`] - Seeded random force sequences
//! - [`trains`] - Units and trains with known net forces
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! railclimb-test = { workspace = true }
//! ```

pub mod forces;
pub mod oracle;
pub mod trains;

pub use forces::{seeded_forces, seeded_nonpositive_forces};
pub use oracle::{is_valid_split, min_partition};
pub use trains::{train_of, unit, SAMPLE_GRADE};
