use std::fmt::Debug;

use num::BigUint;

/// An infinite integer sequence that produces one term per call.
///
/// Terms are arbitrary-precision so that fast-growing sequences do not wrap
/// around.
pub trait SequenceGenerator: Debug {
    fn next(&mut self) -> BigUint;
}
