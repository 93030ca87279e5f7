//! Binomial coefficient - combinatorial helper for guess formulas.

/// Calculates the binomial coefficient `n` choose `k`.
///
/// Used by pattern classes whose guess formula counts unordered selections,
/// e.g. arrangements of uppercase characters within a token.
///
/// # Returns
/// - The number of ways to choose `k` items from `n`
/// - `0` if `k < 0` or `k > n` (no valid selection)
/// - `u64::MAX` if the true value does not fit in a `u64`
pub fn binom(n: i64, k: i64) -> u64 {
    if k < 0 || k > n {
        return 0;
    }

    // Symmetry: C(n, k) == C(n, n - k), iterate over the smaller side.
    let k = k.min(n - k);

    // Multiplicative form: after step j the accumulator is exactly C(n, j + 1),
    // so every division is exact. u128 keeps the pre-division product from
    // overflowing for any result that fits in a u64.
    let mut res: u128 = 1;
    for j in 0..k as u128 {
        res = match res.checked_mul(n as u128 - j) {
            Some(v) => v / (j + 1),
            None => return u64::MAX,
        };
    }

    u64::try_from(res).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binom_small_values() {
        assert_eq!(binom(5, 2), 10);
        assert_eq!(binom(10, 0), 1);
        assert_eq!(binom(0, 0), 1);
        assert_eq!(binom(6, 3), 20);
        assert_eq!(binom(52, 5), 2_598_960);
    }

    #[test]
    fn test_binom_out_of_domain() {
        assert_eq!(binom(5, -1), 0);
        assert_eq!(binom(5, 6), 0);
        assert_eq!(binom(0, 1), 0);
        assert_eq!(binom(-3, -5), 0);
    }

    #[test]
    fn test_binom_symmetry() {
        for n in 0..=20 {
            for k in 0..=n {
                assert_eq!(binom(n, k), binom(n, n - k), "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_binom_edges() {
        assert_eq!(binom(7, 7), 1);
        assert_eq!(binom(7, 1), 7);
    }

    #[test]
    fn test_binom_large_n_exact() {
        // C(60, 30) exceeds u32 but fits u64 exactly.
        assert_eq!(binom(60, 30), 118_264_581_564_861_424);
        // Pascal identity on values near the u64 ceiling of the iteration.
        assert_eq!(binom(40, 20), binom(39, 19) + binom(39, 20));
    }

    #[test]
    fn test_binom_saturates_on_overflow() {
        assert_eq!(binom(200, 100), u64::MAX);
    }
}
