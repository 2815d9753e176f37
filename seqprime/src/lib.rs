//! # Seqprime
//! Seqprime is a small library of elementary number utilities. It provides two
//! independent, pure components:
//!
//! * [`sequences`] — generators for integer sequences, currently the
//!   Fibonacci sequence. Terms are produced as [`num::BigUint`] so that the
//!   exponential growth of the sequence never silently wraps around.
//! * [`primality`] — a trial-division primality test which is total over
//!   all `i64` inputs.
//!
//! Neither component depends on the other, and neither holds state across
//! calls.
//!
//! # Using Seqprime
//! Producing the first terms of the Fibonacci sequence:
//! ```rust
//! use seqprime::sequences::fibonacci;
//!
//! let terms = fibonacci(5).unwrap();
//! assert_eq!(terms.len(), 5);
//! ```
//!
//! Or lazily, one term at a time:
//! ```rust
//! use num::BigUint;
//! use seqprime::sequences::FibonacciSequence;
//! use seqprime::sequences::SequenceGenerator;
//!
//! let mut fib = FibonacciSequence::default();
//! assert_eq!(fib.next(), BigUint::from(0_u32));
//! assert_eq!(fib.next(), BigUint::from(1_u32));
//! assert_eq!(fib.next(), BigUint::from(1_u32));
//! assert_eq!(fib.next(), BigUint::from(2_u32));
//! ```
//!
//! Testing a candidate for primality:
//! ```rust
//! use seqprime::primality::is_prime;
//!
//! assert!(is_prime(29));
//! assert!(!is_prime(30));
//! ```

pub mod primality;
pub mod sequences;
