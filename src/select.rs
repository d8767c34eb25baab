//! Linear-time (expected and worst-case) selection used to find medians of
//! candidate x-coordinates during pruning.

#[inline]
fn cmpxchg(d: &mut [f64], i: usize, j: usize) {
    if d[i] > d[j] {
        d.swap(i, j);
    }
}

/// Sorts a slice of at most five elements using a fixed comparator network.
///
/// Used as the base case of [`kth_smallest`] and to find the median of each
/// group of five during median-of-medians pivot selection.
fn sort_small(d: &mut [f64]) {
    match d.len() {
        0 | 1 => {}
        2 => cmpxchg(d, 0, 1),
        3 => {
            cmpxchg(d, 0, 1);
            cmpxchg(d, 1, 2);
            cmpxchg(d, 0, 1);
        }
        4 => {
            cmpxchg(d, 0, 1);
            cmpxchg(d, 2, 3);
            cmpxchg(d, 0, 2);
            cmpxchg(d, 1, 3);
            cmpxchg(d, 1, 2);
        }
        5 => {
            cmpxchg(d, 0, 1);
            cmpxchg(d, 3, 4);
            cmpxchg(d, 2, 4);
            cmpxchg(d, 2, 3);
            cmpxchg(d, 0, 3);
            cmpxchg(d, 0, 2);
            cmpxchg(d, 1, 4);
            cmpxchg(d, 1, 3);
            cmpxchg(d, 1, 2);
        }
        _ => unreachable!("sort_small only handles groups of up to five elements"),
    }
}

/// Three-way partition of `d` around `pivot`.
///
/// Rearranges `d` in place so that every element before the returned index is
/// strictly less than `pivot`, the element at the returned index (and every
/// element up to the run of values equal to `pivot`) equals `pivot`, and
/// every element after the run is strictly greater. Returns the start index
/// of the run of elements equal to `pivot`; `pivot` must occur in `d`.
pub fn partition(d: &mut [f64], pivot: f64) -> usize {
    let (lo, _hi) = dutch_flag(d, pivot);
    lo
}

fn dutch_flag(d: &mut [f64], pivot: f64) -> (usize, usize) {
    let mut lo = 0usize;
    let mut i = 0usize;
    let mut hi = d.len();
    while i < hi {
        if d[i] < pivot {
            d.swap(lo, i);
            lo += 1;
            i += 1;
        } else if d[i] > pivot {
            hi -= 1;
            d.swap(i, hi);
        } else {
            i += 1;
        }
    }
    (lo, hi)
}

/// Returns the `k`-th smallest element of `d` (0-indexed, ascending), using
/// median-of-medians pivot selection for a worst-case linear number of
/// comparisons. `d` is reordered as a side effect.
///
/// # Panics
/// Panics if `k >= d.len()`.
pub fn kth_smallest(d: &mut [f64], k: usize) -> f64 {
    assert!(k < d.len(), "kth_smallest: k out of bounds");
    let n = d.len();
    if n <= 5 {
        sort_small(d);
        return d[k];
    }

    let num_groups = n.div_ceil(5);
    let mut medians = vec![0.0_f64; num_groups];
    for (group, chunk) in d.chunks_mut(5).enumerate() {
        sort_small(chunk);
        medians[group] = chunk[chunk.len() / 2];
    }
    let mid = medians.len() / 2;
    let pivot = kth_smallest(&mut medians, mid);

    let (lo, hi) = dutch_flag(d, pivot);
    if k < lo {
        kth_smallest(&mut d[..lo], k)
    } else if k < hi {
        pivot
    } else {
        kth_smallest(&mut d[hi..], k - hi)
    }
}

/// The median of `d`: for even `len`, the upper median (rank `len / 2`); for
/// odd `len`, the middle element (rank `len / 2`). `d` is reordered as a side
/// effect.
///
/// # Panics
/// Panics if `d` is empty.
pub fn median(d: &mut [f64]) -> f64 {
    assert!(!d.is_empty(), "median: empty slice");
    kth_smallest(d, d.len() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_sorted(d: &[f64]) -> Vec<f64> {
        let mut v = d.to_vec();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn sort_small_networks_agree_with_reference_sort() {
        let cases: &[&[f64]] = &[
            &[],
            &[1.0],
            &[2.0, 1.0],
            &[3.0, 1.0, 2.0],
            &[4.0, 2.0, 3.0, 1.0],
            &[5.0, 4.0, 3.0, 2.0, 1.0],
            &[3.0, 1.0, 4.0, 1.0, 5.0],
        ];
        for case in cases {
            let mut d = case.to_vec();
            let expected = reference_sorted(case);
            sort_small(&mut d);
            assert_eq!(d, expected, "case {:?}", case);
        }
    }

    #[test]
    fn partition_invariant_holds() {
        let mut d = vec![9.0, 3.0, 7.0, 3.0, 1.0, 8.0, 3.0, 5.0];
        let r = partition(&mut d, 3.0);
        assert!(d[..r].iter().all(|&x| x < 3.0));
        let hi = d[r..].iter().take_while(|&&x| x == 3.0).count() + r;
        assert!(d[r..hi].iter().all(|&x| x == 3.0));
        assert!(d[hi..].iter().all(|&x| x > 3.0));
    }

    #[test]
    fn kth_smallest_matches_reference_sort_for_every_rank() {
        let data = [
            12.0, -4.0, 7.0, 7.0, 0.0, 5.0, 5.0, 5.0, -4.0, 100.0, 3.0, -1.0, 9.0, 2.0, 2.0,
        ];
        let expected = reference_sorted(&data);
        for k in 0..data.len() {
            let mut d = data.to_vec();
            assert_eq!(kth_smallest(&mut d, k), expected[k], "rank {k}");
        }
    }

    #[test]
    fn median_is_upper_median_for_even_length() {
        let mut d = vec![1.2, 2.4];
        assert_eq!(median(&mut d), 2.4);
        let mut d = vec![10.0, 20.0, 30.0, 40.0];
        assert_eq!(median(&mut d), 30.0);
    }

    #[test]
    fn median_is_middle_element_for_odd_length() {
        let mut d = vec![5.0, 1.0, 3.0];
        assert_eq!(median(&mut d), 3.0);
    }

    #[test]
    fn kth_smallest_handles_large_arrays_with_duplicates() {
        let mut data = Vec::new();
        for i in 0..200 {
            data.push((i % 17) as f64);
        }
        let expected = reference_sorted(&data);
        for k in [0usize, 50, 100, 150, 199] {
            let mut d = data.clone();
            assert_eq!(kth_smallest(&mut d, k), expected[k]);
        }
    }
}
