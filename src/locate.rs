use crate::categorize::yoffset;
use crate::types::near_equal;

/// Summary of a floor or ceiling set at a candidate x-coordinate: the
/// binding (extreme) y value, and the min/max slope among the constraints
/// tied at that extreme.
#[derive(Clone, Copy, Debug)]
pub struct Extremum {
    pub y: f64,
    pub min_dx: f64,
    pub max_dx: f64,
    pub valid: bool,
}

impl Extremum {
    fn invalid() -> Self {
        Self {
            y: 0.0,
            min_dx: 0.0,
            max_dx: 0.0,
            valid: false,
        }
    }
}

/// Evaluates every constraint in `idx` at `x = mx` and summarizes the
/// binding extreme. `want_max` selects whether the binding constraint is the
/// one with the largest y (floors) or the smallest (ceilings); slopes are
/// tracked only among the constraints tied at that extreme.
pub fn track_extrema(gx: &[f64], gy: &[f64], h: &[f64], idx: &[usize], mx: f64, want_max: bool) -> Extremum {
    if idx.is_empty() {
        return Extremum::invalid();
    }

    let mut extreme_y = if want_max { f64::NEG_INFINITY } else { f64::INFINITY };
    for &i in idx {
        let (dxi, y0i) = yoffset(gx[i], gy[i], h[i]);
        let y = y0i + dxi * mx;
        if (want_max && y > extreme_y) || (!want_max && y < extreme_y) {
            extreme_y = y;
        }
    }

    let mut min_dx = f64::INFINITY;
    let mut max_dx = f64::NEG_INFINITY;
    for &i in idx {
        let (dxi, y0i) = yoffset(gx[i], gy[i], h[i]);
        let y = y0i + dxi * mx;
        if near_equal(y, extreme_y) {
            min_dx = min_dx.min(dxi);
            max_dx = max_dx.max(dxi);
        }
    }

    Extremum {
        y: extreme_y,
        min_dx,
        max_dx,
        valid: true,
    }
}

/// Where the optimum lies relative to a candidate x, per the floor/ceiling
/// extrema at that x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    Left,
    Right,
    Here,
    HereEdge,
    Infeasible,
}

/// Classifies the optimum location given the floor and ceiling extrema at a
/// candidate x.
pub fn decide(floor: Extremum, ceil: Extremum) -> Decision {
    if ceil.valid && ceil.y < floor.y {
        return if floor.min_dx > ceil.max_dx {
            Decision::Left
        } else if floor.max_dx < ceil.min_dx {
            Decision::Right
        } else {
            Decision::Infeasible
        };
    }

    let min_dx = floor.min_dx;
    let max_dx = floor.max_dx;
    let min_zero = near_equal(min_dx, 0.0);
    let max_zero = near_equal(max_dx, 0.0);

    if min_zero && max_zero {
        Decision::HereEdge
    } else if min_zero && max_dx > 0.0 {
        Decision::Left
    } else if max_zero && min_dx < 0.0 {
        Decision::Right
    } else if min_dx < 0.0 && max_dx > 0.0 {
        Decision::Here
    } else if min_dx > 0.0 {
        Decision::Left
    } else {
        Decision::Right
    }
}
