use super::{extract_failure_vgi, FailureMatch};
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the outcome of a complete failure-correlation run
///
/// Carries both the successes (the failure VGI rows) and the per-observation
/// match records, including the unmatched ones -- the caller always receives
/// the full enumeration, never a silent best-effort substitution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FailureReport {
    /// The correlation outcome for every observation, in input order
    pub matches: Vec<FailureMatch>,

    /// The VGI rows at the matched failure steps (n_matched, nloc)
    pub failure_vgi: Matrix,
}

impl FailureReport {
    /// Allocates a new instance by extracting the failure VGI for the given matches
    pub fn new(vgi: &Matrix, matches: &[FailureMatch]) -> Result<Self, StrError> {
        let failure_vgi = extract_failure_vgi(vgi, matches)?;
        Ok(FailureReport {
            matches: matches.to_vec(),
            failure_vgi,
        })
    }

    /// Returns the observations that could not be correlated within tolerance
    pub fn unmatched(&self) -> Vec<&FailureMatch> {
        self.matches.iter().filter(|m| m.step.is_none()).collect()
    }

    /// Reads a JSON file containing a FailureReport
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "cannot open failure report file")?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|_| "cannot parse failure report file")
    }

    /// Writes a JSON file with this FailureReport
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p).map_err(|_| "cannot create directory for failure report file")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create failure report file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write failure report file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
