//! Common mathematical operations for normal-basis construction

/// Deterministic primality test by trial division
///
/// The moduli involved are `2N + 1` for field degrees in the hundreds, so
/// trial division up to `sqrt(n)` is plenty.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut d = 5u64;
    while d * d <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Successive powers `base^0, base^1, ..., base^(count-1)` reduced modulo `m`
///
/// Computed iteratively; `m` must be non-zero.
pub fn powers_mod(base: u64, m: u64, count: usize) -> Vec<u64> {
    let mut powers = Vec::with_capacity(count);
    let mut acc = 1 % m;
    for _ in 0..count {
        powers.push(acc);
        acc = (acc * base) % m;
    }
    powers
}

/// Reduce a signed value into `[0, m)`
#[inline]
pub fn reduce_signed(value: i64, m: i64) -> i64 {
    ((value % m) + m) % m
}
