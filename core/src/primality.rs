//! # Primality Testing
//!
//! Trial division: a candidate `n` is prime when it is greater than 1 and no
//! integer in `[2, floor(sqrt(n))]` divides it evenly. Any divisor above the
//! square root would pair with one below it, so the trial range stops there.
//!
//! The trial bound is written as `divisor <= n / divisor` rather than the
//! usual `divisor * divisor <= n`. Both mean `divisor² <= n` for positive
//! operands, but the division form cannot overflow, so [`is_prime`] is total
//! over all of `i64`.
//!
//! ```rust
//! use primeburn::primality::is_prime;
//!
//! assert!(is_prime(2));
//! assert!(is_prime(97));
//! assert!(!is_prime(100));
//! assert!(!is_prime(-7));
//! ```

/// Whether `n` has no positive divisors other than 1 and itself.
///
/// Everything at or below 1, negatives included, is rejected before the
/// trial loop runs. For `n = 2` and `n = 3` the trial range is empty and the
/// loop body never executes.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}
