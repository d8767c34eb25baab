use crate::types::{near_equal, rot, Mat2, Vec2};

/// Outcome of [`condition`].
pub enum Conditioned {
    /// Conditioning succeeded; `m` constraints survived into the output
    /// arrays (trivially-satisfied rows are dropped).
    Ok { rot: Mat2, offset: Vec2, m: usize },
    /// A trivially-infeasible row was found: a zero-gradient constraint with
    /// `h > 0` (`0 >= h` can never hold).
    Infeasible,
    /// The objective direction `(cx, cy)` is the zero vector.
    ZeroGradient,
}

/// Rotates the objective to align with +y, rotates and normalizes every
/// constraint, drops constraints that are trivially satisfied everywhere,
/// and recenters via closed-form least-squares offset.
///
/// Writes the conditioned constraints into `gx_out[..m]`, `gy_out[..m]`,
/// `h_out[..m]` (which must each have length at least `gx_src.len()`).
pub fn condition(
    cx: f64,
    cy: f64,
    gx_src: &[f64],
    gy_src: &[f64],
    h_src: &[f64],
    gx_out: &mut [f64],
    gy_out: &mut [f64],
    h_out: &mut [f64],
) -> Conditioned {
    let Some(r) = rot(cx, cy) else {
        return Conditioned::ZeroGradient;
    };

    let n = gx_src.len();
    let mut m = 0usize;
    for i in 0..n {
        let g = r * Vec2::new(gx_src[i], gy_src[i]);
        let norm = g.x.abs().max(g.y.abs());
        if near_equal(norm, 0.0) {
            if h_src[i] > 0.0 && !near_equal(h_src[i], 0.0) {
                return Conditioned::Infeasible;
            }
            continue;
        }
        gx_out[m] = g.x / norm;
        gy_out[m] = g.y / norm;
        h_out[m] = h_src[i] / norm;
        m += 1;
    }

    let mut a11 = 0.0;
    let mut a12 = 0.0;
    let mut a22 = 0.0;
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for i in 0..m {
        let (gx, gy, h) = (gx_out[i], gy_out[i], h_out[i]);
        a11 += gx * gx;
        a12 += gx * gy;
        a22 += gy * gy;
        b1 += gx * h;
        b2 += gy * h;
    }
    let gtg = Mat2::new(a11, a12, a12, a22);
    let gth = Vec2::new(b1, b2);
    let offset = gtg.try_inverse().map(|inv| inv * gth).unwrap_or_else(Vec2::zeros);

    for i in 0..m {
        h_out[i] -= offset.x * gx_out[i] + offset.y * gy_out[i];
    }

    Conditioned::Ok { rot: r, offset, m }
}
