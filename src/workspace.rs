use crate::categorize::{self, Categorized};
use crate::condition::{self, Conditioned};
use crate::edge::{self, EdgeResult};
use crate::endgame::{self, EndgameResult};
use crate::locate;
use crate::prune;
use crate::select;
use crate::types::{Mat2, Vec2};

/// Advisory byte count for hosting a workspace of the given `capacity`.
///
/// Accounts for the six `f64` arrays and three index arrays of §3, each
/// padded to a 64-byte cache-line boundary; this crate's [`Workspace`] owns
/// its buffers directly rather than placing them in a caller-provided
/// buffer, so this function exists only to let callers size external
/// allocations (e.g. a pool of workspaces) in the spirit of the original
/// arena layout.
pub fn mem_size(capacity: usize) -> usize {
    const ALIGN: usize = 64;
    let round = |bytes: usize| bytes.div_ceil(ALIGN) * ALIGN;
    let f64_array = round(capacity * std::mem::size_of::<f64>());
    let half_f64_array = round(capacity.div_ceil(2) * std::mem::size_of::<f64>());
    let usize_array = round(capacity * std::mem::size_of::<usize>());
    // Gx, Gy, h, dx, y0
    5 * f64_array
        // x_intersect
        + half_f64_array
        // floor, ceil, tmp
        + 3 * usize_array
}

/// Outcome of [`Workspace::solve`] / [`solve_simple`], in the caller's
/// original coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveResult {
    /// The workspace was null-equivalent (unused here) or `n` exceeded
    /// `capacity`.
    Error,
    Infeasible,
    Unbounded,
    Edge { p0: (f64, f64), p1: (f64, f64) },
    Point { p: (f64, f64) },
}

/// Reusable scratch storage for [`Workspace::solve`].
///
/// Every buffer is sized to `capacity` at construction; `solve` never grows
/// them, only indexes into the first `n` (or fewer, as constraints are
/// dropped or eliminated) entries.
pub struct Workspace {
    capacity: usize,
    gx: Vec<f64>,
    gy: Vec<f64>,
    h: Vec<f64>,
    dx: Vec<f64>,
    y0: Vec<f64>,
    x_intersect: Vec<f64>,
    floor: Vec<usize>,
    ceil: Vec<usize>,
    tmp: Vec<usize>,
}

impl Workspace {
    /// Allocates a workspace able to host problems of up to `capacity`
    /// constraints.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            gx: vec![0.0; capacity],
            gy: vec![0.0; capacity],
            h: vec![0.0; capacity],
            dx: vec![0.0; capacity],
            y0: vec![0.0; capacity],
            x_intersect: vec![0.0; capacity.div_ceil(2)],
            floor: vec![0usize; capacity],
            ceil: vec![0usize; capacity],
            tmp: vec![0usize; capacity],
        }
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Solves `minimize cx*x + cy*y` subject to `Gx[i]*x + Gy[i]*y >= h[i]`
    /// for `i` in `0..n`.
    pub fn solve(&mut self, cx: f64, cy: f64, gx: &[f64], gy: &[f64], h: &[f64], n: usize) -> SolveResult {
        if n > self.capacity {
            return SolveResult::Error;
        }

        let (rot, offset, m) = match condition::condition(cx, cy, gx, gy, h, &mut self.gx, &mut self.gy, &mut self.h) {
            Conditioned::Ok { rot, offset, m } => (rot, offset, m),
            Conditioned::Infeasible => return SolveResult::Infeasible,
            Conditioned::ZeroGradient => return SolveResult::Error,
        };

        let Categorized {
            mut x0,
            mut x1,
            mut floor_len,
            mut ceil_len,
        } = match categorize::categorize(&self.gx, &self.gy, &self.h, m, &mut self.floor, &mut self.ceil) {
            Some(c) => c,
            None => return SolveResult::Infeasible,
        };

        for &i in self.floor[..floor_len].iter().chain(self.ceil[..ceil_len].iter()) {
            let (dxi, y0i) = categorize::yoffset(self.gx[i], self.gy[i], self.h[i]);
            self.dx[i] = dxi;
            self.y0[i] = y0i;
        }

        let mut mx: Option<f64> = None;
        let mut optimum_is_left = false;

        while !(floor_len == 0 || (floor_len <= 1 && ceil_len <= 1)) {
            let (new_floor_len, xi_floor) = prune::prune_pass(
                &self.floor[..floor_len],
                floor_len,
                &self.gx,
                &self.gy,
                &self.h,
                &self.dx,
                false,
                x0,
                x1,
                mx,
                optimum_is_left,
                &mut self.tmp[..floor_len],
                &mut self.x_intersect,
            );
            self.floor[..new_floor_len].copy_from_slice(&self.tmp[..new_floor_len]);

            let (new_ceil_len, xi_ceil) = prune::prune_pass(
                &self.ceil[..ceil_len],
                ceil_len,
                &self.gx,
                &self.gy,
                &self.h,
                &self.dx,
                true,
                x0,
                x1,
                mx,
                optimum_is_left,
                &mut self.tmp[..ceil_len],
                &mut self.x_intersect[xi_floor..],
            );
            self.ceil[..new_ceil_len].copy_from_slice(&self.tmp[..new_ceil_len]);

            floor_len = new_floor_len;
            ceil_len = new_ceil_len;
            let total_xi = xi_floor + xi_ceil;

            if total_xi == 0 {
                continue;
            }

            let median_x = select::median(&mut self.x_intersect[..total_xi]);
            let floor_extremum = locate::track_extrema(&self.gx, &self.gy, &self.h, &self.floor[..floor_len], median_x, true);
            let ceil_extremum = locate::track_extrema(&self.gx, &self.gy, &self.h, &self.ceil[..ceil_len], median_x, false);

            match locate::decide(floor_extremum, ceil_extremum) {
                locate::Decision::Left => {
                    x1 = median_x;
                    mx = Some(median_x);
                    optimum_is_left = true;
                }
                locate::Decision::Right => {
                    x0 = median_x;
                    mx = Some(median_x);
                    optimum_is_left = false;
                }
                locate::Decision::Here => {
                    return point_result(rot, offset, median_x, floor_extremum.y);
                }
                locate::Decision::HereEdge => {
                    return match edge::resolve_edge(&self.gx, &self.gy, &self.h, &self.floor[..floor_len], &self.ceil[..ceil_len], x0, x1) {
                        EdgeResult::Point { x, y } => point_result(rot, offset, x, y),
                        EdgeResult::Edge { x0, x1, y } => edge_result(rot, offset, x0, x1, y),
                    };
                }
                locate::Decision::Infeasible => return SolveResult::Infeasible,
            }
        }

        match endgame::endgame(&self.gx, &self.gy, &self.h, &self.floor[..floor_len], &self.ceil[..ceil_len], x0, x1) {
            EndgameResult::Unbounded => SolveResult::Unbounded,
            EndgameResult::Infeasible => SolveResult::Infeasible,
            EndgameResult::Point { x, y } => point_result(rot, offset, x, y),
            EndgameResult::Edge { x0, x1, y } => edge_result(rot, offset, x0, x1, y),
        }
    }
}

fn inverse_transform(rot: Mat2, offset: Vec2, x: f64, y: f64) -> (f64, f64) {
    let u = x + offset.x;
    let v = y + offset.y;
    let p = rot.transpose() * Vec2::new(u, v);
    (p.x, p.y)
}

fn point_result(rot: Mat2, offset: Vec2, x: f64, y: f64) -> SolveResult {
    SolveResult::Point {
        p: inverse_transform(rot, offset, x, y),
    }
}

fn edge_result(rot: Mat2, offset: Vec2, x0: f64, x1: f64, y: f64) -> SolveResult {
    SolveResult::Edge {
        p0: inverse_transform(rot, offset, x0, y),
        p1: inverse_transform(rot, offset, x1, y),
    }
}

/// Creates a workspace sized exactly for this problem, solves it, and lets
/// it drop. Convenience wrapper for one-off solves.
pub fn solve_simple(cx: f64, cy: f64, gx: &[f64], gy: &[f64], h: &[f64], n: usize) -> SolveResult {
    let mut ws = Workspace::new(n);
    ws.solve(cx, cy, gx, gy, h, n)
}
