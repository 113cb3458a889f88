use crate::StrError;
use russell_lab::Matrix;

/// Defines the exponent of the triaxiality term in the void-growth integrand (Rice-Tracey)
pub const TRIAXIALITY_EXPONENT: f64 = 1.5;

/// Computes the stress triaxiality history
///
/// The triaxiality is the elementwise ratio `-pressure / mises`. Row 0 is pinned
/// to exactly zero: all stresses vanish at the initial, unloaded state and the
/// ratio would be 0/0 there. The pin applies to the first row only; a vanishing
/// von Mises stress at any later step indicates defective input data and is not
/// masked.
///
/// # Input
///
/// * `mises` -- von Mises equivalent stress (nstep, nloc)
/// * `pressure` -- hydrostatic pressure (nstep, nloc)
///
/// # Output
///
/// Returns the (nstep, nloc) triaxiality matrix.
pub fn triaxiality(mises: &Matrix, pressure: &Matrix) -> Result<Matrix, StrError> {
    if mises.dims() != pressure.dims() {
        return Err("mises and pressure matrices must have the same dimensions");
    }
    let (nstep, nloc) = mises.dims();
    let mut triax = Matrix::new(nstep, nloc);
    for i in 1..nstep {
        for j in 0..nloc {
            triax.set(i, j, -pressure.get(i, j) / mises.get(i, j));
        }
    }
    Ok(triax)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
