use super::{triaxiality, VgiSet, TRIAXIALITY_EXPONENT, VGI_KEY_INTEGRATION_POINT, VGI_KEY_NODAL_EXTRAPOLATED};
use crate::base::FieldHistory;
use crate::StrError;
use russell_lab::Matrix;

/// Computes the monotonic void growth index history
///
/// For each location (column) independently, integrates `exp(1.5 T)` over the
/// equivalent plastic strain with the trapezoidal rule:
///
/// ```text
/// VGI[i] = VGI[i-1] + ½ (peeq[i] - peeq[i-1]) (g[i] + g[i-1]),  g = exp(1.5 T)
/// ```
///
/// Row 0 of the output is identically zero (no void growth before loading begins).
/// This function is pure: it never mutates its inputs and recomputation yields
/// bit-identical output.
///
/// # Input
///
/// * `mises` -- von Mises equivalent stress (nstep, nloc)
/// * `pressure` -- hydrostatic pressure (nstep, nloc)
/// * `peeq` -- equivalent plastic strain (nstep, nloc)
///
/// All three matrices must share dimensions and row ordering (row 0 = initial,
/// unloaded state).
///
/// # Output
///
/// Returns the (nstep, nloc) VGI history.
pub fn calc_monotonic_vgi(mises: &Matrix, pressure: &Matrix, peeq: &Matrix) -> Result<Matrix, StrError> {
    if mises.dims() != pressure.dims() || pressure.dims() != peeq.dims() {
        return Err("mises, pressure, and peeq matrices must all have the same dimensions");
    }
    let triax = triaxiality(mises, pressure)?;
    let (nstep, nloc) = mises.dims();

    // growth integrand
    let mut integrand = Matrix::new(nstep, nloc);
    for i in 0..nstep {
        for j in 0..nloc {
            integrand.set(i, j, f64::exp(TRIAXIALITY_EXPONENT * triax.get(i, j)));
        }
    }

    // trapezoidal-rule accumulation (columns are independent)
    let mut vgi = Matrix::new(nstep, nloc);
    for j in 0..nloc {
        for i in 1..nstep {
            let d_peeq = peeq.get(i, j) - peeq.get(i - 1, j);
            let d_vgi = 0.5 * d_peeq * (integrand.get(i, j) + integrand.get(i - 1, j));
            vgi.set(i, j, vgi.get(i - 1, j) + d_vgi);
        }
    }
    Ok(vgi)
}

/// Computes the monotonic VGI at all data locations (integration points and nodes)
///
/// Convenience for the workflow that carries both the raw integration-point data
/// and the nodal-extrapolated data of the same element set. Returns a [VgiSet]
/// keyed by [VGI_KEY_INTEGRATION_POINT] and [VGI_KEY_NODAL_EXTRAPOLATED].
pub fn calc_all_monotonic_vgi(int_point: &FieldHistory, nodal: &FieldHistory) -> Result<VgiSet, StrError> {
    if int_point.nstep() != nodal.nstep() {
        return Err("integration-point and nodal field histories must have the same number of steps");
    }
    let mut set = VgiSet::new();
    set.insert(
        VGI_KEY_INTEGRATION_POINT.to_string(),
        calc_monotonic_vgi(&int_point.mises, &int_point.pressure, &int_point.peeq)?,
    );
    set.insert(
        VGI_KEY_NODAL_EXTRAPOLATED.to_string(),
        calc_monotonic_vgi(&nodal.mises, &nodal.pressure, &nodal.peeq)?,
    );
    Ok(set)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
