/// Consecutive integers from an origin, stepping by exactly 1.
///
/// Never skips, never repeats. Advances with `checked_add`, so the sequence
/// ends (yields `None`) only once `i64` itself runs out.
#[derive(Debug, Clone)]
pub struct Ascending {
    n: Option<i64>,
}

impl From<i64> for Ascending {
    fn from(origin: i64) -> Self {
        Self { n: Some(origin) }
    }
}

impl Iterator for Ascending {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let n = self.n?;
        self.n = n.checked_add(1);
        Some(n)
    }
}
