//! Property-based tests for the testable properties in the specification
//! this solver implements (near-equality tolerances, selection correctness,
//! and feasibility/optimality of solved points).

use proptest::prelude::*;

use crate::select::{kth_smallest, median, partition};
use crate::types::near_equal;
use crate::workspace::{solve_simple, SolveResult};

fn reference_sorted(d: &[f64]) -> Vec<f64> {
    let mut v = d.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

proptest! {
    // P4: near_equal is reflexive and coarser than strict equality.
    #[test]
    fn near_equal_is_reflexive(x in -1e20f64..1e20) {
        prop_assert!(near_equal(x, x));
    }

    #[test]
    fn near_equal_is_symmetric(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assert_eq!(near_equal(a, b), near_equal(b, a));
    }

    // P7: kth_smallest matches a reference sort for every rank.
    #[test]
    fn kth_smallest_matches_reference_sort(
        data in prop::collection::vec(-1000.0f64..1000.0, 1..200)
    ) {
        let expected = reference_sorted(&data);
        for k in 0..data.len() {
            let mut d = data.clone();
            prop_assert_eq!(kth_smallest(&mut d, k), expected[k]);
        }
    }

    // P5: median is permutation-invariant and matches the upper/middle rank.
    #[test]
    fn median_is_permutation_invariant(
        mut data in prop::collection::vec(-1000.0f64..1000.0, 1..64),
        seed in 0u64..10_000,
    ) {
        let expected = reference_sorted(&data)[data.len() / 2];
        let original = data.clone();
        prop_assert_eq!(median(&mut data), expected);

        // shuffle deterministically via the seed and check invariance
        let mut idx: Vec<usize> = (0..original.len()).collect();
        let mut s = seed;
        for i in (1..idx.len()).rev() {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = (s >> 33) as usize % (i + 1);
            idx.swap(i, j);
        }
        let mut permuted: Vec<f64> = idx.iter().map(|&i| original[i]).collect();
        prop_assert_eq!(median(&mut permuted), expected);
    }

    // P6: partition's three-way invariant.
    #[test]
    fn partition_three_way_invariant(
        mut data in prop::collection::vec(-100.0f64..100.0, 1..128),
        pivot_idx in 0usize..128,
    ) {
        let pivot_idx = pivot_idx % data.len();
        let pivot = data[pivot_idx];
        let r = partition(&mut data, pivot);
        prop_assert!(data[..r].iter().all(|&x| x < pivot));
        let hi = data[r..].iter().take_while(|&&x| x == pivot).count() + r;
        prop_assert!(data[r..hi].iter().all(|&x| x == pivot));
        prop_assert!(data[hi..].iter().all(|&x| x > pivot));
    }

    // P1: a returned POINT satisfies every original constraint.
    #[test]
    fn point_results_are_feasible(
        angles in prop::collection::vec(0.0f64..std::f64::consts::TAU, 3..8),
        radii in prop::collection::vec(0.5f64..1.5, 3..8),
    ) {
        let n = angles.len().min(radii.len());
        let mut gx = Vec::with_capacity(n);
        let mut gy = Vec::with_capacity(n);
        let mut h = Vec::with_capacity(n);
        for i in 0..n {
            let (s, c) = angles[i].sin_cos();
            gx.push(-c);
            gy.push(-s);
            h.push(-radii[i]);
        }

        if let SolveResult::Point { p } = solve_simple(0.0, 1.0, &gx, &gy, &h, n) {
            for i in 0..n {
                let slack = gx[i] * p.0 + gy[i] * p.1 - h[i];
                prop_assert!(slack > -1e-6, "constraint {i} violated: slack {slack}");
            }
        }
    }
}
