use crate::base::LocationKind;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Holds the VGI narrowed to the nodes nearest the characteristic lengths (l*)
///
/// This is an explicit, separately named output: the canonical full-width VGI
/// history survives the narrowing and remains available to the caller.
#[derive(Clone, Debug)]
pub struct DeterministicVgi {
    /// The narrowed VGI history (nstep, nlstar)
    pub vgi: Matrix,

    /// The column of the source VGI selected for each characteristic length (nlstar)
    pub columns: Vec<usize>,

    /// The node label selected for each characteristic length (nlstar)
    pub labels: Vec<usize>,
}

/// Extracts the deterministic VGI at the nodes nearest each characteristic length
///
/// For each characteristic length l*, locates the node whose initial x-coordinate
/// is nearest to `crack_tip_x - l*` (the crack tip is assumed to sit at a smaller
/// x-coordinate than the crack opening) and copies that node's VGI column.
///
/// # Input
///
/// * `vgi` -- the nodal VGI history (nstep, nloc)
/// * `kind` -- the kind of the VGI columns; must be [LocationKind::Node]
/// * `labels` -- the node labels matching the VGI columns (nloc)
/// * `x_initial` -- the initial (step 0) x-coordinate of each node (nloc)
/// * `crack_tip_x` -- the initial x-coordinate of the crack tip
/// * `lengths` -- the characteristic lengths l*, e.g.,
///   [crate::base::Material::characteristic_lengths]
pub fn calc_deterministic_vgi(
    vgi: &Matrix,
    kind: LocationKind,
    labels: &[usize],
    x_initial: &Vector,
    crack_tip_x: f64,
    lengths: &[f64],
) -> Result<DeterministicVgi, StrError> {
    if kind != LocationKind::Node {
        return Err("deterministic length-scale extraction requires nodal VGI data");
    }
    let (nstep, nloc) = vgi.dims();
    if nloc == 0 {
        return Err("the VGI history must have at least one column");
    }
    if labels.len() != nloc || x_initial.dim() != nloc {
        return Err("labels and x-coordinates must match the VGI columns");
    }
    if lengths.is_empty() {
        return Err("at least one characteristic length is required");
    }
    let nlstar = lengths.len();
    let mut out = Matrix::new(nstep, nlstar);
    let mut columns = vec![0; nlstar];
    let mut out_labels = vec![0; nlstar];
    for (k, lstar) in lengths.iter().enumerate() {
        let target = crack_tip_x - lstar;
        let col = nearest_index(x_initial, target);
        for i in 0..nstep {
            out.set(i, k, vgi.get(i, col));
        }
        columns[k] = col;
        out_labels[k] = labels[col];
    }
    Ok(DeterministicVgi {
        vgi: out,
        columns,
        labels: out_labels,
    })
}

/// Returns the index of the entry nearest to the search value (first minimum wins)
fn nearest_index(values: &Vector, search: f64) -> usize {
    let mut smallest = f64::abs(values[0] - search);
    let mut nearest = 0;
    for i in 1..values.dim() {
        let delta = f64::abs(values[i] - search);
        if delta < smallest {
            smallest = delta;
            nearest = i;
        }
    }
    nearest
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
