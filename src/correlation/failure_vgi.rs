use super::FailureMatch;
use crate::vgi::VgiSet;
use crate::StrError;
use russell_lab::Matrix;

/// Extracts the VGI rows corresponding to the matched failure steps
///
/// Produces one row per matched observation, in input order; observations
/// without a match are simply omitted. The result is therefore an
/// (n_matched, nloc) matrix, possibly with zero rows.
///
/// Fails if a matched step lies beyond the VGI history, which indicates a
/// load history that was not aligned with the VGI rows (e.g., a history-type
/// variable that was not left-padded; see
/// [crate::base::LoadHistory::from_history_variable]).
pub fn extract_failure_vgi(vgi: &Matrix, matches: &[FailureMatch]) -> Result<Matrix, StrError> {
    let (nstep, nloc) = vgi.dims();
    let steps: Vec<usize> = matches.iter().filter_map(|m| m.step).collect();
    if steps.iter().any(|i| *i >= nstep) {
        return Err("a failure step lies beyond the VGI history; load history and VGI rows are misaligned");
    }
    let mut out = Matrix::new(steps.len(), nloc);
    for (k, &i) in steps.iter().enumerate() {
        for j in 0..nloc {
            out.set(k, j, vgi.get(i, j));
        }
    }
    Ok(out)
}

/// Extracts the failure VGI independently from every variant of a [VgiSet]
///
/// Applies the same row slice to each keyed VGI variant (e.g., integration-point
/// and nodal-extrapolated) and returns a like-keyed collection.
pub fn extract_failure_vgi_set(set: &VgiSet, matches: &[FailureMatch]) -> Result<VgiSet, StrError> {
    let mut out = VgiSet::new();
    for (key, vgi) in set {
        out.insert(key.clone(), extract_failure_vgi(vgi, matches)?);
    }
    Ok(out)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
