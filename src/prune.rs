use crate::types::near_equal;

/// Intersection of two conditioned constraint lines `(Gx_a, Gy_a, h_a)` and
/// `(Gx_b, Gy_b, h_b)`. Returns `None` if the lines are parallel.
pub fn line_intersection(
    gx_a: f64,
    gy_a: f64,
    h_a: f64,
    gx_b: f64,
    gy_b: f64,
    h_b: f64,
) -> Option<(f64, f64)> {
    let d = gx_a * gy_b - gx_b * gy_a;
    if near_equal(d, 0.0) {
        return None;
    }
    let x = (h_a * gy_b - h_b * gy_a) / d;
    let y = (h_b * gx_a - h_a * gx_b) / d;
    Some((x, y))
}

fn dir_for(optimum_is_left: bool, is_ceil: bool) -> f64 {
    let a = if optimum_is_left { 1.0 } else { -1.0 };
    let b = if is_ceil { 1.0 } else { -1.0 };
    a * b
}

/// One pairing-and-pruning pass over a floor or ceiling list.
///
/// Pairs consecutive entries of `idx[..len]`, eliminates one member of each
/// pair via a geometric redundancy rule when possible, and otherwise retains
/// both members and records the pair's x-intersection as a median candidate.
/// The compacted surviving list is written to `tmp[..new_len]`; candidate
/// x-coordinates are written to `x_intersect[..xi_count]`.
///
/// Returns `(new_len, xi_count)`.
#[allow(clippy::too_many_arguments)]
pub fn prune_pass(
    idx: &[usize],
    len: usize,
    gx: &[f64],
    gy: &[f64],
    h: &[f64],
    dx: &[f64],
    is_ceil: bool,
    x0: f64,
    x1: f64,
    mx: Option<f64>,
    optimum_is_left: bool,
    tmp: &mut [usize],
    x_intersect: &mut [f64],
) -> (usize, usize) {
    let mut write = 0usize;
    let mut xi_count = 0usize;
    let pairs = len / 2;

    for p in 0..pairs {
        let a = idx[2 * p];
        let b = idx[2 * p + 1];
        let (gxa, gya, ha) = (gx[a], gy[a], h[a]);
        let (gxb, gyb, hb) = (gx[b], gy[b], h[b]);

        match line_intersection(gxa, gya, ha, gxb, gyb, hb) {
            None => {
                // Parallel: the larger h dominates (both rows are already
                // normalized so max(|Gx|,|Gy|)=1, making h's comparable).
                tmp[write] = if ha >= hb { a } else { b };
                write += 1;
            }
            Some((xi, _yi)) => {
                let tied_at_mx = mx.is_some_and(|m| near_equal(xi, m));
                let left_case = xi < x0 || (tied_at_mx && !optimum_is_left);
                let right_case = xi > x1 || (tied_at_mx && optimum_is_left);

                if left_case {
                    let dir = dir_for(optimum_is_left, is_ceil);
                    tmp[write] = if dir * dx[a] >= dir * dx[b] { a } else { b };
                    write += 1;
                } else if right_case {
                    let dir = dir_for(true, is_ceil);
                    tmp[write] = if dir * dx[a] >= dir * dx[b] { a } else { b };
                    write += 1;
                } else {
                    tmp[write] = a;
                    write += 1;
                    tmp[write] = b;
                    write += 1;
                    x_intersect[xi_count] = xi;
                    xi_count += 1;
                }
            }
        }
    }

    if len % 2 == 1 {
        tmp[write] = idx[len - 1];
        write += 1;
    }

    (write, xi_count)
}
