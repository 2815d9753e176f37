//! Generators for integer sequences.

pub mod fibonacci_sequence;
pub mod sequence_error;
pub mod sequence_generator;

pub use fibonacci_sequence::FibonacciSequence;
pub use fibonacci_sequence::fibonacci;
pub use sequence_error::SequenceError;
pub use sequence_generator::SequenceGenerator;
