//! Primality testing.

pub mod trial_division;

pub use trial_division::is_prime;
