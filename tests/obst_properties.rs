use obst_graph::error::InvariantCheck;
use obst_graph::obst::{prefix_sums, solve_frequencies};
use obst_graph::tree_builder::tree_edges;
use proptest::prelude::*;

fn one_indexed(freqs: &[u32]) -> Vec<u32> {
    std::iter::once(0).chain(freqs.iter().copied()).collect()
}

/// Exhaustive minimum of sum(depth * freq) over all trees on keys i..=j.
fn full_search_cost(freqs: &[u32], i: usize, j: usize, depth: u64) -> u64 {
    (i..=j)
        .map(|k| {
            let left = if k > i {
                full_search_cost(freqs, i, k - 1, depth + 1)
            } else {
                0
            };
            let right = if k < j {
                full_search_cost(freqs, k + 1, j, depth + 1)
            } else {
                0
            };
            freqs[k] as u64 * depth + left + right
        })
        .min()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn cost_matches_exhaustive_search(raw in proptest::collection::vec(0u32..1000, 1..=8)) {
        let freqs = one_indexed(&raw);
        let tables = solve_frequencies(&freqs).expect("non-empty input");
        prop_assert_eq!(tables.optimal_cost(), full_search_cost(&freqs, 1, raw.len(), 1));
    }

    #[test]
    fn root_table_is_a_tree_over_all_keys(raw in proptest::collection::vec(0u32..1000, 1..=40)) {
        let n = raw.len();
        let tables = solve_frequencies(&one_indexed(&raw)).expect("non-empty input");
        prop_assert!(tables.is_correct().is_ok());

        let edges = tree_edges(&tables);
        prop_assert_eq!(edges.len(), n - 1);

        let mut children: Vec<usize> = edges.iter().map(|&(_, child)| child).collect();
        children.push(tables.root_index());
        children.sort_unstable();
        prop_assert_eq!(children, (1..=n).collect::<Vec<_>>());

        let depths = tables.depths();
        prop_assert!(depths[1..].iter().all(|&d| (1..=n).contains(&d)));
    }

    #[test]
    fn depths_reproduce_the_cost(raw in proptest::collection::vec(0u32..1000, 1..=40)) {
        let freqs = one_indexed(&raw);
        let tables = solve_frequencies(&freqs).expect("non-empty input");
        let weighted: u64 = tables
            .depths()
            .iter()
            .zip(&freqs)
            .map(|(&d, &f)| d as u64 * f as u64)
            .sum();
        prop_assert_eq!(weighted, tables.optimal_cost());
    }

    #[test]
    fn raising_a_frequency_never_lowers_the_cost(
        raw in proptest::collection::vec(0u32..1000, 1..=20),
        pick in any::<prop::sample::Index>(),
        bump in 1u32..500,
    ) {
        let before = solve_frequencies(&one_indexed(&raw)).expect("non-empty input");
        let mut raised = raw.clone();
        let idx = pick.index(raised.len());
        raised[idx] += bump;
        let after = solve_frequencies(&one_indexed(&raised)).expect("non-empty input");
        prop_assert!(after.optimal_cost() >= before.optimal_cost());
    }

    #[test]
    fn chosen_root_is_the_first_minimum(raw in proptest::collection::vec(0u32..4, 1..=12)) {
        let freqs = one_indexed(&raw);
        let n = raw.len();
        let tables = solve_frequencies(&freqs).expect("non-empty input");
        let pref = prefix_sums(&freqs);

        for len in 2..=n {
            for i in 1..=(n - len + 1) {
                let j = i + len - 1;
                let s = pref[j] - pref[i - 1];
                let chosen = tables.root(i, j);
                let best = tables.cost(i, j);
                for k in i..chosen {
                    let candidate = tables.cost(i, k - 1) + tables.cost(k + 1, j) + s;
                    prop_assert!(
                        candidate > best,
                        "k = {} ties with root {} on [{}, {}]",
                        k,
                        chosen,
                        i,
                        j
                    );
                }
            }
        }
    }
}

#[test]
fn equal_frequencies_pick_lowest_tied_root() {
    let tables = solve_frequencies(&one_indexed(&[5; 4])).unwrap();
    assert_eq!(tables.root_index(), 2);
    let tables = solve_frequencies(&one_indexed(&[5; 6])).unwrap();
    assert_eq!(tables.root_index(), 3);
}
