use crate::base::LoadHistory;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the correlation outcome for one observed failure value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureMatch {
    /// The experimentally observed failure value
    pub observation: f64,

    /// The matched step index into the load/VGI history (None if no step met the tolerance)
    pub step: Option<usize>,

    /// The smallest relative error found over all steps (percent)
    pub relative_error: f64,
}

/// Determines the simulation step nearest to each observed failure value
///
/// For each observation `v`, computes the relative error
/// `|100 (load[i] - v) / v|` at every step and takes the argmin (the first
/// minimum wins on ties). The step is accepted only if the minimum error is
/// below `tolerance`; otherwise the observation is reported with `step = None`
/// and its best error -- unmatched observations are expected and never abort
/// the processing of the remaining ones.
///
/// # Input
///
/// * `load_history` -- the scalar response series, aligned step-for-step with
///   the VGI history rows (see [LoadHistory] for the start conventions)
/// * `observations` -- the observed failure values; all must be nonzero
/// * `tolerance` -- the acceptance tolerance in percent (e.g., 0.05 for a
///   precisely controlled displacement-driven test)
///
/// # Output
///
/// Returns one [FailureMatch] per observation, in input order.
pub fn find_failure_steps(
    load_history: &LoadHistory,
    observations: &[f64],
    tolerance: f64,
) -> Result<Vec<FailureMatch>, StrError> {
    if load_history.nstep() == 0 {
        return Err("load history must have at least one step");
    }
    if observations.is_empty() {
        return Err("at least one failure observation is required");
    }
    if tolerance <= 0.0 {
        return Err("tolerance must be positive");
    }
    if observations.iter().any(|v| *v == 0.0) {
        return Err("failure observations must be nonzero");
    }
    let values = load_history.values();
    let mut matches = Vec::with_capacity(observations.len());
    for &v in observations {
        let mut best_err = f64::abs(100.0 * (values[0] - v) / v);
        let mut best_step = 0;
        for i in 1..values.dim() {
            let err = f64::abs(100.0 * (values[i] - v) / v);
            if err < best_err {
                best_err = err;
                best_step = i;
            }
        }
        let step = if best_err < tolerance { Some(best_step) } else { None };
        matches.push(FailureMatch {
            observation: v,
            step,
            relative_error: best_err,
        });
    }
    Ok(matches)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::find_failure_steps;
    use crate::base::LoadHistory;
    use russell_lab::{approx_eq, Vector};

    fn load(values: &[f64]) -> LoadHistory {
        LoadHistory::from_field_variable(Vector::from(&values))
    }

    #[test]
    fn captures_invalid_input() {
        let lh = load(&[0.0, 1.0]);
        assert_eq!(
            find_failure_steps(&lh, &[], 1.0).err(),
            Some("at least one failure observation is required")
        );
        assert_eq!(
            find_failure_steps(&lh, &[1.0], 0.0).err(),
            Some("tolerance must be positive")
        );
        assert_eq!(
            find_failure_steps(&lh, &[1.0, 0.0], 1.0).err(),
            Some("failure observations must be nonzero")
        );
        let empty = load(&[]);
        assert_eq!(
            find_failure_steps(&empty, &[1.0], 1.0).err(),
            Some("load history must have at least one step")
        );
    }

    #[test]
    fn exact_match_yields_zero_error() {
        let lh = load(&[0.0, 1.0, 2.0, 3.0]);
        let matches = find_failure_steps(&lh, &[2.0], 1.0).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].step, Some(2));
        assert_eq!(matches[0].relative_error, 0.0);
    }

    #[test]
    fn tolerance_boundary_works() {
        // nearest to 2.0 is step 2 (value 2.5) with 25 % error
        let lh = load(&[0.0, 1.0, 2.5]);
        let matches = find_failure_steps(&lh, &[2.0], 10.0).unwrap();
        assert_eq!(matches[0].step, None);
        approx_eq(matches[0].relative_error, 25.0, 1e-13);

        let matches = find_failure_steps(&lh, &[2.0], 30.0).unwrap();
        assert_eq!(matches[0].step, Some(2));
    }

    #[test]
    fn unmatched_observations_do_not_abort_processing() {
        let lh = load(&[0.0, 1.0, 2.0]);
        let matches = find_failure_steps(&lh, &[1.0, 100.0, 2.0], 0.5).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].step, Some(1));
        assert_eq!(matches[1].step, None);
        assert_eq!(matches[1].observation, 100.0);
        assert_eq!(matches[2].step, Some(2));
    }

    #[test]
    fn ties_resolve_to_the_first_minimum() {
        // both steps 1 and 3 are 1.0 away from the observation 2.0
        let lh = load(&[0.0, 1.0, 5.0, 3.0]);
        let matches = find_failure_steps(&lh, &[2.0], 60.0).unwrap();
        assert_eq!(matches[0].step, Some(1));
    }
}
