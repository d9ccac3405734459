use crate::{Error, Overflow, Strategy, MAX_EXACT_INPUT, WRAPS_TO_ZERO_INPUT};

/// Computes `n!` by direct recursion.
///
/// Any `n <= 1`, negative values included, is the base case and yields `1`. Past
/// [`MAX_EXACT_INPUT`] the product wraps around, and from [`WRAPS_TO_ZERO_INPUT`] on it
/// is `0`, so recursion never goes deeper than that.
pub fn factorial(n: i64) -> i64 {
    if n <= 1 {
        1
    } else if n >= WRAPS_TO_ZERO_INPUT {
        0
    } else {
        // `n * factorial(n - 1)` panics on overflow in debug builds and wraps in release.
        n.wrapping_mul(factorial(n - 1))
    }
}

/// Recursive factorial clamped at `i64::MAX`.
pub fn saturating_factorial(n: i64) -> i64 {
    if n <= 1 {
        1
    } else if n > MAX_EXACT_INPUT {
        i64::MAX
    } else {
        n.saturating_mul(saturating_factorial(n - 1))
    }
}

/// Recursive factorial that fails on the first multiplication leaving the `i64` range.
pub fn checked_factorial(n: i64) -> Result<i64, Error> {
    if n <= 1 {
        return Ok(1);
    }
    if n > MAX_EXACT_INPUT {
        return Err(Error::Overflow { n: MAX_EXACT_INPUT + 1 });
    }
    let prev = checked_factorial(n - 1)?;
    n.checked_mul(prev).ok_or(Error::Overflow { n })
}

/// Iterative counterpart of [`factorial`].
pub fn factorial_iter(n: i64) -> i64 {
    // The accumulator stays `0` once it reaches it.
    (2..=n.min(WRAPS_TO_ZERO_INPUT)).fold(1, |acc: i64, k| acc.wrapping_mul(k))
}

/// Iterative counterpart of [`saturating_factorial`].
pub fn saturating_factorial_iter(n: i64) -> i64 {
    (2..=n.min(MAX_EXACT_INPUT + 1)).fold(1, |acc: i64, k| acc.saturating_mul(k))
}

/// Iterative counterpart of [`checked_factorial`].
pub fn checked_factorial_iter(n: i64) -> Result<i64, Error> {
    (2..=n).try_fold(1, |acc: i64, k| acc.checked_mul(k).ok_or(Error::Overflow { n: k }))
}

/// Computes `n!` with the given evaluation strategy and overflow policy.
///
/// Only [`Overflow::Checked`] can fail.
pub fn evaluate(n: i64, strategy: Strategy, overflow: Overflow) -> Result<i64, Error> {
    tracing::trace!(n, %strategy, %overflow, "evaluating factorial");

    let value = match (strategy, overflow) {
        (Strategy::Recursive, Overflow::Wrapping) => factorial(n),
        (Strategy::Recursive, Overflow::Saturating) => saturating_factorial(n),
        (Strategy::Recursive, Overflow::Checked) => checked_factorial(n)?,
        (Strategy::Iterative, Overflow::Wrapping) => factorial_iter(n),
        (Strategy::Iterative, Overflow::Saturating) => saturating_factorial_iter(n),
        (Strategy::Iterative, Overflow::Checked) => checked_factorial_iter(n)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];
    const POLICIES: [Overflow; 3] = [Overflow::Wrapping, Overflow::Saturating, Overflow::Checked];

    #[test]
    fn known_values() {
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(-1), 1);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn base_case_covers_negative_inputs() {
        for n in [-3, -1, 0, 1, i64::MIN] {
            assert_eq!(factorial(n), 1, "n = {n}");
            assert_eq!(factorial_iter(n), 1, "n = {n}");
            assert_eq!(saturating_factorial(n), 1, "n = {n}");
            assert_eq!(checked_factorial(n), Ok(1), "n = {n}");
        }
    }

    #[test]
    fn recurrence_holds_in_exact_range() {
        for n in 2..=MAX_EXACT_INPUT {
            assert_eq!(factorial(n), n * factorial(n - 1), "n = {n}");
        }
    }

    #[test]
    fn all_combinations_agree_in_exact_range() {
        for n in -5..=MAX_EXACT_INPUT {
            let expected = factorial(n);
            for strategy in STRATEGIES {
                for overflow in POLICIES {
                    assert_eq!(
                        evaluate(n, strategy, overflow),
                        Ok(expected),
                        "n = {n}, {strategy}, {overflow}"
                    );
                }
            }
        }
    }

    #[test]
    fn wrapping_past_exact_range() {
        let n = MAX_EXACT_INPUT + 1;
        assert_eq!(factorial(n), n.wrapping_mul(factorial(n - 1)));
        for n in 21..=70 {
            assert_eq!(factorial(n), factorial_iter(n), "n = {n}");
        }
        assert_ne!(factorial(WRAPS_TO_ZERO_INPUT - 1), 0);
        assert_eq!(factorial(WRAPS_TO_ZERO_INPUT), 0);
    }

    #[test]
    fn wraps_to_zero_without_shortcut() {
        for n in WRAPS_TO_ZERO_INPUT..=200 {
            let full = (2..=n).fold(1, |acc: i64, k| acc.wrapping_mul(k));
            assert_eq!(full, 0, "n = {n}");
            assert_eq!(factorial(n), full, "n = {n}");
        }
    }

    #[test]
    fn huge_inputs_return_immediately() {
        for n in [10_000_000, i64::MAX] {
            assert_eq!(factorial(n), 0, "n = {n}");
            assert_eq!(factorial_iter(n), 0, "n = {n}");
            assert_eq!(saturating_factorial(n), i64::MAX, "n = {n}");
            assert_eq!(saturating_factorial_iter(n), i64::MAX, "n = {n}");
            assert_eq!(checked_factorial(n), Err(Error::Overflow { n: 21 }), "n = {n}");
            assert_eq!(checked_factorial_iter(n), Err(Error::Overflow { n: 21 }), "n = {n}");
        }
    }

    #[test]
    fn saturating_past_exact_range() {
        assert_eq!(saturating_factorial(21), i64::MAX);
        assert_eq!(saturating_factorial_iter(21), i64::MAX);
        assert_eq!(saturating_factorial(40), i64::MAX);
        for n in 21..=40 {
            assert_eq!(saturating_factorial(n), saturating_factorial_iter(n), "n = {n}");
        }
    }

    #[test]
    fn checked_reports_first_overflow() {
        let err = Error::Overflow { n: 21 };
        assert_eq!(checked_factorial(21), Err(err));
        assert_eq!(checked_factorial(30), Err(err));
        assert_eq!(checked_factorial_iter(21), Err(err));
        assert_eq!(checked_factorial_iter(30), Err(err));
        assert_eq!(evaluate(25, Strategy::Iterative, Overflow::Checked), Err(err));
        assert_eq!(err.to_string(), "factorial overflows i64 at 21!");
    }

    #[test]
    fn safe_across_threads() {
        let handles: Vec<_> = (0..=MAX_EXACT_INPUT)
            .map(|n| std::thread::spawn(move || (n, factorial(n))))
            .collect();
        for handle in handles {
            let (n, value) = handle.join().unwrap();
            assert_eq!(value, factorial_iter(n));
        }
    }
}
