/// Minimal weighted depth over every binary search tree on 1-indexed `freqs`.
///
/// Tries every root of every range without memoization, only usable for small inputs.
pub fn brute_force_cost(freqs: &[u32]) -> u64 {
    let n = freqs.len().saturating_sub(1);
    best_subtree(freqs, 1, n, 1)
}

fn best_subtree(freqs: &[u32], i: usize, j: usize, depth: u64) -> u64 {
    if i > j {
        return 0;
    }
    (i..=j)
        .map(|k| {
            freqs[k] as u64 * depth
                + best_subtree(freqs, i, k - 1, depth + 1)
                + best_subtree(freqs, k + 1, j, depth + 1)
        })
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_hand_checked_costs() {
        assert_eq!(brute_force_cost(&[0, 7]), 7);
        assert_eq!(brute_force_cost(&[0, 1, 1, 1]), 5);
        assert_eq!(brute_force_cost(&[0, 10, 5, 20]), 55);
    }
}
