//! Parameters of the optimal normal basis fields

/// Extension degree of GF(2^233)
pub const ONB233_DEGREE: usize = 233;

/// Prime `2N + 1` whose Gauss period generates the type II normal basis of GF(2^233)
pub const ONB233_GAUSS_PRIME: u64 = 2 * ONB233_DEGREE as u64 + 1;

/// Length of the fixed-width text encoding of a GF(2^233) element
pub const ONB233_TEXT_LEN: usize = ONB233_DEGREE;

/// Number of set entries in a type II multiplication table of degree `n`
pub const fn onb2_table_weight(n: usize) -> usize {
    2 * n - 1
}
