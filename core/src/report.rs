//! The per-candidate result line.
//!
//! One [`Report`] per tested integer, rendered by its [`Display`] impl as
//! exactly `El numero: {n} es un numero primo? {true|false}`. These lines are
//! the program's sole data output.

use std::fmt::Display;

use crate::primality::is_prime;

/// Primality verdict for a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub candidate: i64,
    pub prime: bool,
}

impl From<i64> for Report {
    fn from(candidate: i64) -> Self {
        Self {
            candidate,
            prime: is_prime(candidate),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "El numero: {} es un numero primo? {}",
            self.candidate, self.prime
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn computes_the_verdict_for_the_candidate() {
        assert_eq!(
            Report::from(97),
            Report {
                candidate: 97,
                prime: true
            }
        );
        assert_eq!(
            Report::from(100),
            Report {
                candidate: 100,
                prime: false
            }
        );
    }

    #[test]
    fn renders_the_exact_line() {
        assert_eq!(
            Report::from(2).to_string(),
            "El numero: 2 es un numero primo? true"
        );
        assert_eq!(
            Report::from(4).to_string(),
            "El numero: 4 es un numero primo? false"
        );
    }
}
