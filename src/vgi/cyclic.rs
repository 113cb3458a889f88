use super::{triaxiality, TRIAXIALITY_EXPONENT};
use crate::StrError;
use russell_lab::Matrix;

/// Holds the results of the cyclic (damage-accounting) VGI computation
#[derive(Clone, Debug)]
pub struct CyclicVgi {
    /// The cyclic VGI history, floored at zero (nstep, nloc)
    pub vgi: Matrix,

    /// The equivalent plastic strain accumulated during compressive excursions (nstep, nloc)
    pub cume_peeq: Matrix,
}

/// Computes the cyclic void growth index history with compressive-damage accounting
///
/// Uses `g = exp(1.5 |T|)` as the growth integrand; each trapezoidal increment is
/// signed by `sign(T)` so that compressive excursions shrink the running VGI, which
/// is floored at zero every step. In parallel, the equivalent plastic strain
/// accumulated under negative triaxiality is tracked as `cume_peeq`.
///
/// # Warning
///
/// The damage cycle-counting implemented here has NOT been verified against the
/// reference method of Myers et al. (2009). Unless `accept_unvalidated` is true,
/// this function refuses to compute and returns an error. Opting in yields
/// numerically plausible but unverified results.
///
/// # Input
///
/// * `mises`, `pressure`, `peeq` -- (nstep, nloc) histories as in
///   [crate::vgi::calc_monotonic_vgi]
/// * `accept_unvalidated` -- explicit opt-in acknowledging the unverified status
pub fn calc_cyclic_vgi(
    mises: &Matrix,
    pressure: &Matrix,
    peeq: &Matrix,
    accept_unvalidated: bool,
) -> Result<CyclicVgi, StrError> {
    if !accept_unvalidated {
        return Err("cyclic damage accounting has not been verified against Myers et al. (2009); set accept_unvalidated to proceed regardless");
    }
    if mises.dims() != pressure.dims() || pressure.dims() != peeq.dims() {
        return Err("mises, pressure, and peeq matrices must all have the same dimensions");
    }
    let triax = triaxiality(mises, pressure)?;
    let (nstep, nloc) = mises.dims();

    // growth integrand with the absolute value of the triaxiality
    let mut integrand = Matrix::new(nstep, nloc);
    for i in 0..nstep {
        for j in 0..nloc {
            integrand.set(i, j, f64::exp(TRIAXIALITY_EXPONENT * f64::abs(triax.get(i, j))));
        }
    }

    // signed trapezoidal accumulation, floored at zero, with damage tracking
    let mut vgi = Matrix::new(nstep, nloc);
    let mut cume_peeq = Matrix::new(nstep, nloc);
    for j in 0..nloc {
        for i in 1..nstep {
            let d_peeq = peeq.get(i, j) - peeq.get(i - 1, j);
            let d_vgi = 0.5 * d_peeq * (integrand.get(i, j) + integrand.get(i - 1, j)) * sign(triax.get(i, j));
            vgi.set(i, j, f64::max(0.0, vgi.get(i - 1, j) + d_vgi));
            if triax.get(i, j) < 0.0 {
                // compressive excursion, damage occurs
                cume_peeq.set(i, j, cume_peeq.get(i - 1, j) + d_peeq);
            } else {
                // tensile excursion, normal VGI behavior
                cume_peeq.set(i, j, cume_peeq.get(i - 1, j));
            }
        }
    }
    Ok(CyclicVgi { vgi, cume_peeq })
}

/// Returns the sign of x with sign(0) = 0 (f64::signum maps zero to one)
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{calc_cyclic_vgi, sign};
    use russell_lab::{approx_eq, Matrix};

    #[test]
    fn refuses_without_explicit_opt_in() {
        let m = Matrix::new(2, 1);
        let res = calc_cyclic_vgi(&m, &m, &m, false);
        assert_eq!(
            res.err(),
            Some("cyclic damage accounting has not been verified against Myers et al. (2009); set accept_unvalidated to proceed regardless")
        );
    }

    #[test]
    fn captures_shape_mismatch() {
        let a = Matrix::new(2, 1);
        let b = Matrix::new(3, 1);
        assert_eq!(
            calc_cyclic_vgi(&a, &a, &b, true).err(),
            Some("mises, pressure, and peeq matrices must all have the same dimensions")
        );
    }

    #[test]
    fn sign_treats_zero_as_zero() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-2.0), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn tensile_step_matches_monotonic_formula() {
        let mises = Matrix::from(&[[1.0], [2.0]]);
        let pressure = Matrix::from(&[[0.0], [-1.0]]);
        let peeq = Matrix::from(&[[0.0], [0.1]]);
        let res = calc_cyclic_vgi(&mises, &pressure, &peeq, true).unwrap();
        let correct = 0.5 * 0.1 * (f64::exp(0.75) + 1.0);
        approx_eq(res.vgi.get(1, 0), correct, 1e-15);
        assert_eq!(res.cume_peeq.get(1, 0), 0.0); // tensile: no damage strain
    }

    #[test]
    fn vgi_is_floored_and_damage_accumulates_under_compression() {
        // tension (T = 0.5) followed by two compressive steps (T = -0.5)
        let mises = Matrix::from(&[[0.0], [2.0], [2.0], [2.0]]);
        let pressure = Matrix::from(&[[0.0], [-1.0], [1.0], [1.0]]);
        let peeq = Matrix::from(&[[0.0], [0.1], [0.2], [0.5]]);
        let res = calc_cyclic_vgi(&mises, &pressure, &peeq, true).unwrap();
        let g = f64::exp(0.75);
        let vgi1 = 0.5 * 0.1 * (g + 1.0);
        approx_eq(res.vgi.get(1, 0), vgi1, 1e-15);
        // step 2 removes 0.5*0.1*(g+g) = 0.1*g > vgi1, hence the floor engages by step 3
        let vgi2 = f64::max(0.0, vgi1 - 0.1 * g);
        approx_eq(res.vgi.get(2, 0), vgi2, 1e-15);
        assert_eq!(res.vgi.get(3, 0), 0.0);
        // damage strain accumulates only on the compressive steps
        assert_eq!(res.cume_peeq.get(1, 0), 0.0);
        approx_eq(res.cume_peeq.get(2, 0), 0.1, 1e-15);
        approx_eq(res.cume_peeq.get(3, 0), 0.4, 1e-15);
        // the floor guarantees non-negativity everywhere
        for i in 0..4 {
            assert!(res.vgi.get(i, 0) >= 0.0);
        }
    }
}
