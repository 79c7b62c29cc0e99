//! Gauss-period multiplication table for type II optimal normal bases

use core::fmt;

use log::debug;
use nbfield_common::{powers_mod, reduce_signed};

use crate::error::{validate, Error, Result};

/// The N×N boolean multiplication-structure table of a type II normal basis.
///
/// With `p = 2N + 1` and `rests[i] = 2^i mod p`, entry `(i, j)` is set iff one of
/// `±rests[i] ± rests[j]` is congruent to 1 modulo `p`. The table is immutable once
/// built and is shared by reference with every multiplication.
#[derive(Clone, PartialEq, Eq)]
pub struct MultiplicationTable<const N: usize> {
    modulus: u64,
    /// Row-major N×N entries.
    cells: Vec<bool>,
    /// Column indices of the set entries of each row.
    rows: Vec<Vec<usize>>,
}

impl<const N: usize> MultiplicationTable<N> {
    /// Derive the table for degree `N`.
    ///
    /// Fails with a field-size error when `2N + 1` is not prime, or when `2` and `-1`
    /// do not generate the units modulo `2N + 1` (no type II basis exists).
    pub fn build() -> Result<Self> {
        let p = validate::gauss_prime(N)?;
        let rests = powers_mod(2, p, N);

        if !covers_units_up_to_sign(&rests, p) {
            return Err(Error::FieldSize {
                degree: N,
                reason: format!("2 and -1 do not generate the units modulo {}", p).into(),
            });
        }

        let m = p as i64;
        let mut cells = vec![false; N * N];
        for i in 0..N {
            let ri = rests[i] as i64;
            for j in 0..N {
                let rj = rests[j] as i64;
                cells[i * N + j] = [ri + rj, ri - rj, -ri + rj, -ri - rj]
                    .iter()
                    .any(|&s| reduce_signed(s, m) == 1);
            }
        }

        let rows = (0..N)
            .map(|i| (0..N).filter(|&j| cells[i * N + j]).collect())
            .collect();

        let table = Self {
            modulus: p,
            cells,
            rows,
        };
        debug!(
            "built normal basis table: degree={}, p={}, weight={}",
            N,
            p,
            table.weight()
        );
        Ok(table)
    }

    /// Extension degree N
    pub const fn degree(&self) -> usize {
        N
    }

    /// The Gauss prime `2N + 1`
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Entry `(i, j)`; panics if either index is `>= N`
    pub fn get(&self, i: usize, j: usize) -> bool {
        assert!(i < N && j < N, "table index ({}, {}) out of range for degree {}", i, j, N);
        self.cells[i * N + j]
    }

    /// Column indices of the set entries in row `i`
    pub fn row(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    /// Number of set entries
    pub fn weight(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl<const N: usize> fmt::Debug for MultiplicationTable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiplicationTable")
            .field("degree", &N)
            .field("modulus", &self.modulus)
            .field("weight", &self.weight())
            .finish()
    }
}

// Every nonzero residue modulo p must be ±2^i for some i < N.
fn covers_units_up_to_sign(rests: &[u64], p: u64) -> bool {
    let mut seen = vec![false; p as usize];
    for &r in rests {
        seen[r as usize] = true;
        seen[(p - r) as usize] = true;
    }
    seen[1..].iter().all(|&s| s)
}
