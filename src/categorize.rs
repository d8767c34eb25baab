use crate::types::near_equal;

/// Outcome of [`categorize`].
pub struct Categorized {
    pub x0: f64,
    pub x1: f64,
    pub floor_len: usize,
    pub ceil_len: usize,
}

/// Converts a non-vertical conditioned constraint `(Gx, Gy, h)` to slope/
/// intercept form: the half-plane `Gx*x + Gy*y >= h` becomes, for a floor
/// (`Gy > 0`), `y >= y0 + dx*x`, and for a ceiling (`Gy < 0`),
/// `y <= y0 + dx*x`.
#[inline]
pub fn yoffset(gx: f64, gy: f64, h: f64) -> (f64, f64) {
    (-gx / gy, h / gy)
}

/// Splits the `m` conditioned constraints into ceiling, floor, and vertical
/// sets, tightening `[x0, x1]` from the verticals along the way.
///
/// Writes the surviving floor indices into `floor_out[..floor_len]` and the
/// ceiling indices into `ceil_out[..ceil_len]`. Returns `None` if the
/// vertical constraints alone already make the problem infeasible
/// (`x0 > x1`).
pub fn categorize(
    gx: &[f64],
    gy: &[f64],
    h: &[f64],
    m: usize,
    floor_out: &mut [usize],
    ceil_out: &mut [usize],
) -> Option<Categorized> {
    let mut x0 = f64::NEG_INFINITY;
    let mut x1 = f64::INFINITY;
    let mut floor_len = 0usize;
    let mut ceil_len = 0usize;

    for i in 0..m {
        if near_equal(gy[i], 0.0) {
            if gx[i] > 0.0 {
                x0 = x0.max(h[i] / gx[i]);
            } else if gx[i] < 0.0 {
                x1 = x1.min(h[i] / gx[i]);
            }
            // Gx also ~0 would mean a fully degenerate row; the conditioner
            // already dropped or rejected those before categorization runs.
        } else if gy[i] > 0.0 {
            floor_out[floor_len] = i;
            floor_len += 1;
        } else {
            ceil_out[ceil_len] = i;
            ceil_len += 1;
        }
    }

    if x0 > x1 && !near_equal(x0, x1) {
        return None;
    }

    Some(Categorized {
        x0,
        x1,
        floor_len,
        ceil_len,
    })
}
