use num::BigUint;

use super::SequenceError;
use super::SequenceGenerator;

/// The Fibonacci sequence is a recursive sequence of the form:
/// 0, 1, 1, 2, 3, 5, 8, 13, 21, 34, ...
/// where each term is the sum of the two preceding terms.
///
/// Generating the next element is computed in constant time from the running
/// pair `(current, next)`. Terms are arbitrary-precision since the values grow
/// as ~1.618^n, so overflows cannot occur.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    current: BigUint,
    next: BigUint,
}

impl Default for FibonacciSequence {
    fn default() -> FibonacciSequence {
        FibonacciSequence {
            current: BigUint::from(0_u32),
            next: BigUint::from(1_u32),
        }
    }
}

impl SequenceGenerator for FibonacciSequence {
    fn next(&mut self) -> BigUint {
        let sum = &self.current + &self.next;
        let emitted = std::mem::replace(&mut self.current, self.next.clone());
        self.next = sum;
        emitted
    }
}

/// Produces the first `num_terms` terms of the Fibonacci sequence.
///
/// Returns [`SequenceError::NegativeLength`] when `num_terms` is negative;
/// `fibonacci(0)` is the empty sequence. Runs in O(`num_terms`) time with
/// constant auxiliary state beyond the output itself.
pub fn fibonacci(num_terms: i64) -> Result<Vec<BigUint>, SequenceError> {
    if num_terms < 0 {
        return Err(SequenceError::NegativeLength(num_terms));
    }
    let mut fibonacci_sequence = FibonacciSequence::default();
    Ok((0..num_terms)
        .map(|_| fibonacci_sequence.next())
        .collect())
}
