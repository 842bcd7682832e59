//! Optimal binary search tree by interval dynamic programming.
//!
//! For keys `1..=n` with frequencies `f`, `cost(i, j)` is the minimal value of
//! `sum(depth(k) * f[k])` over all binary search trees on keys `i..=j`, root at depth 1.
//! With `s(i, j) = f[i] + ... + f[j]`:
//!
//! ```text
//! cost(i, i - 1) = 0
//! cost(i, j)     = s(i, j) + min over i <= k <= j of cost(i, k - 1) + cost(k + 1, j)
//! ```
//!
//! Ranges are filled by increasing length, O(n^3) time and O(n^2) space.
//! On equal costs the smallest `k` wins.

use crate::error::{InvariantCheck, ObstError};
use crate::keys::KeyFrequencies;
use fixedbitset::FixedBitSet;
use tracing::debug;

/// Maximal number of keys accepted by [`solve`].
///
/// Both tables hold `(n + 2)^2` entries, so this caps them at about 64 MiB before
/// anything is allocated. Every candidate cost is the cost of some tree, bounded by
/// `n * sum(f) <= n^2 * u32::MAX`, which fits into `u64` well past this limit.
pub const MAX_KEYS: usize = 2_048;

/// Cost and root tables of the optimal binary search tree.
///
/// Both tables are indexed by 1-based key ranges `[i, j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstTables {
    n: usize,
    // (n + 2) x (n + 2), so that cost[j + 1][j] is addressable for j = n
    cost: Vec<Vec<u64>>,
    root: Vec<Vec<usize>>,
}

/// Cumulative frequencies, `pref[0] = 0` and `pref[i] = pref[i - 1] + freqs[i]`.
///
/// `freqs` is 1-indexed, `freqs[0]` is ignored.
pub fn prefix_sums(freqs: &[u32]) -> Vec<u64> {
    let mut pref = Vec::with_capacity(freqs.len().max(1));
    pref.push(0u64);
    for &f in freqs.iter().skip(1) {
        let last = *pref.last().unwrap_or(&0);
        pref.push(last + f as u64);
    }
    pref
}

/// Computes the optimal tree for already extracted keys.
pub fn solve(kf: &KeyFrequencies) -> Result<ObstTables, ObstError> {
    solve_frequencies(kf.freqs())
}

/// Computes cost and root tables for 1-indexed `freqs` (`freqs[0]` is ignored).
pub fn solve_frequencies(freqs: &[u32]) -> Result<ObstTables, ObstError> {
    let n = freqs.len().saturating_sub(1);
    if n == 0 {
        return Err(ObstError::EmptyInput);
    }
    if n > MAX_KEYS {
        return Err(ObstError::TooManyKeys {
            count: n,
            max: MAX_KEYS,
        });
    }

    let pref = prefix_sums(freqs);
    let mut cost = vec![vec![0u64; n + 2]; n + 2];
    let mut root = vec![vec![0usize; n + 2]; n + 2];

    for i in 1..=n {
        cost[i][i] = freqs[i] as u64;
        root[i][i] = i;
    }
    for i in 1..=n + 1 {
        cost[i][i - 1] = 0;
    }

    for len in 2..=n {
        for i in 1..=(n - len + 1) {
            let j = i + len - 1;
            let s = pref[j] - pref[i - 1];

            // k = i has an empty left range
            let mut best = cost[i + 1][j] + s;
            let mut best_k = i;
            for k in (i + 1)..=j {
                let candidate = cost[i][k - 1] + cost[k + 1][j] + s;
                if candidate < best {
                    best = candidate;
                    best_k = k;
                }
            }

            cost[i][j] = best;
            root[i][j] = best_k;
        }
    }

    debug!(keys = n, cost = cost[1][n], root = root[1][n], "solved optimal bst");
    Ok(ObstTables { n, cost, root })
}

impl ObstTables {
    /// Number of keys.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Minimal cost of keys `i..=j`, `j = i - 1` denotes the empty range.
    pub fn cost(&self, i: usize, j: usize) -> u64 {
        debug_assert!(1 <= i && i <= j + 1 && j <= self.n);
        self.cost[i][j]
    }

    /// Chosen root of keys `i..=j`, requires `i <= j`.
    pub fn root(&self, i: usize, j: usize) -> usize {
        debug_assert!(1 <= i && i <= j && j <= self.n);
        self.root[i][j]
    }

    /// Cost of the whole tree, `cost(1, n)`.
    pub fn optimal_cost(&self) -> u64 {
        self.cost[1][self.n]
    }

    /// Root of the whole tree, `root(1, n)`.
    pub fn root_index(&self) -> usize {
        self.root[1][self.n]
    }

    /// Depth of every key in the encoded tree, the root has depth 1.
    ///
    /// Returned vector is 1-indexed, slot 0 is 0.
    pub fn depths(&self) -> Vec<usize> {
        let mut depth = vec![0; self.n + 1];
        let mut stack = vec![(1, self.n, 1)];
        while let Some((i, j, d)) = stack.pop() {
            if i > j {
                continue;
            }
            let k = self.root[i][j];
            depth[k] = d;
            stack.push((k + 1, j, d + 1));
            stack.push((i, k - 1, d + 1));
        }
        depth
    }
}

impl InvariantCheck<ObstError> for ObstTables {
    /// Checks that descending from `root(1, n)` reaches every key exactly once.
    fn is_correct(&self) -> Result<(), ObstError> {
        let mut seen = FixedBitSet::with_capacity(self.n + 1);
        let mut stack = vec![(1, self.n)];

        while let Some((i, j)) = stack.pop() {
            if i > j {
                continue;
            }
            let k = self.root[i][j];
            if k < i || k > j {
                return Err(ObstError::MalformedRootTable(format!(
                    "root {k} of range [{i}, {j}] lies outside of it"
                )));
            }
            if seen.put(k) {
                return Err(ObstError::MalformedRootTable(format!(
                    "key {k} is reached twice"
                )));
            }
            stack.push((k + 1, j));
            stack.push((i, k - 1));
        }

        let reached = seen.count_ones(1..);
        if reached != self.n {
            return Err(ObstError::MalformedRootTable(format!(
                "{reached} of {} keys reached",
                self.n
            )));
        }
        Ok(())
    }
}
