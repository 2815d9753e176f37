/// Determines whether `num` is prime by trial division.
///
/// A prime number is an integer greater than 1 with no positive divisors other
/// than 1 and itself, so every input below 2 (including 0, 1, and all negative
/// numbers) is rejected immediately.
///
/// Candidate divisors run from 2 up to and including floor(sqrt(`num`)): any
/// factorization `num = i * j` with `i <= j` implies `i <= sqrt(num)`, so a
/// divisor above the bound can only occur paired with one at or below it.
/// The bound is checked as `divisor <= num / divisor` rather than by squaring
/// the divisor, which stays exact for `num` close to `i64::MAX`.
///
/// Runs in O(sqrt(`num`)) time and is total: no input is an error.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= num / divisor {
        if num % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
