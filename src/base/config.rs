use super::{FieldHistory, LoadHistory, Specimen};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of one failure-correlation analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// The test specimen geometry
    pub specimen: Specimen,

    /// The experimentally observed failure values, one per physical test replicate
    ///
    /// Displacements for the displacement-driven geometries; critical J values
    /// for the crack-tip geometries. All values must be nonzero because the
    /// correlation metric is a relative error.
    pub failure_observations: Vec<f64>,

    /// Optional override of the specimen's default tolerance (percent)
    pub tolerance: Option<f64>,
}

impl AnalysisConfig {
    /// Allocates a new instance with the specimen's default tolerance
    pub fn new(specimen: Specimen, failure_observations: Vec<f64>) -> Self {
        AnalysisConfig {
            specimen,
            failure_observations,
            tolerance: None,
        }
    }

    /// Returns the tolerance (percent) to be used by the failure-step search
    pub fn effective_tolerance(&self) -> f64 {
        match self.tolerance {
            Some(value) => value,
            None => self.specimen.failure_tolerance(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), StrError> {
        if self.failure_observations.is_empty() {
            return Err("at least one failure observation is required");
        }
        if self.failure_observations.iter().any(|v| *v == 0.0) {
            return Err("failure observations must be nonzero");
        }
        if self.effective_tolerance() <= 0.0 {
            return Err("tolerance must be positive");
        }
        Ok(())
    }
}

/// Holds the complete input of one post-processing run (configuration and data)
///
/// This is the JSON document consumed by the `vgpost_report` command-line tool.
/// The `load` series is stored raw; [AnalysisInput::load_history] applies the
/// start convention dictated by the specimen.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// The analysis configuration
    pub config: AnalysisConfig,

    /// The aligned stress/strain histories
    pub fields: FieldHistory,

    /// The raw scalar load/response series (un-padded)
    pub load: Vec<f64>,
}

impl AnalysisInput {
    /// Builds the load history, applying the specimen's start convention
    pub fn load_history(&self) -> LoadHistory {
        LoadHistory::new(&self.load, self.config.specimen.load_convention())
    }

    /// Reads a JSON file containing an AnalysisInput
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "cannot open analysis input file")?;
        let reader = BufReader::new(file);
        let input: AnalysisInput = serde_json::from_reader(reader).map_err(|_| "cannot parse analysis input file")?;
        input.config.validate()?;
        Ok(input)
    }

    /// Writes a JSON file with this AnalysisInput
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p).map_err(|_| "cannot create directory for analysis input file")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create analysis input file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write analysis input file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{AnalysisConfig, AnalysisInput};
    use crate::base::{FieldHistory, LocationKind, Material, Specimen, DEFAULT_TEST_DIR};
    use russell_lab::Matrix;

    #[test]
    fn effective_tolerance_prefers_override() {
        let mut config = AnalysisConfig::new(Specimen::Sntt, vec![1.0]);
        assert_eq!(config.effective_tolerance(), 0.05);
        config.tolerance = Some(1.5);
        assert_eq!(config.effective_tolerance(), 1.5);
    }

    #[test]
    fn validate_works() {
        let config = AnalysisConfig::new(Specimen::Sntt, Vec::new());
        assert_eq!(config.validate().err(), Some("at least one failure observation is required"));

        let config = AnalysisConfig::new(Specimen::Sntt, vec![1.0, 0.0]);
        assert_eq!(config.validate().err(), Some("failure observations must be nonzero"));

        let mut config = AnalysisConfig::new(Specimen::Sntt, vec![1.0]);
        config.tolerance = Some(0.0);
        assert_eq!(config.validate().err(), Some("tolerance must be positive"));

        config.tolerance = None;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn load_history_applies_specimen_convention() {
        let fields = FieldHistory::new(
            Matrix::new(3, 1),
            Matrix::new(3, 1),
            Matrix::new(3, 1),
            LocationKind::Node,
            vec![1],
        )
        .unwrap();
        let input = AnalysisInput {
            config: AnalysisConfig::new(Specimen::CompactTension(Material::Ap50), vec![15.0]),
            fields,
            load: vec![10.0, 20.0],
        };
        let load = input.load_history();
        assert_eq!(load.nstep(), 3); // left-padded: J starts at the first nonzero step
        assert_eq!(load.values()[0], 0.0);
        assert_eq!(load.values()[2], 20.0);
    }

    #[test]
    fn write_and_read_json_work() {
        let fields = FieldHistory::new(
            Matrix::from(&[[0.0], [2.0]]),
            Matrix::from(&[[0.0], [-1.0]]),
            Matrix::from(&[[0.0], [0.1]]),
            LocationKind::Node,
            vec![7],
        )
        .unwrap();
        let input = AnalysisInput {
            config: AnalysisConfig::new(Specimen::Sntt, vec![0.5]),
            fields,
            load: vec![0.0, 0.5],
        };
        let path = format!("{}/analysis_input.json", DEFAULT_TEST_DIR);
        input.write_json(&path).unwrap();
        let read = AnalysisInput::read_json(&path).unwrap();
        assert_eq!(read.config.specimen, Specimen::Sntt);
        assert_eq!(read.load, &[0.0, 0.5]);
        assert_eq!(read.fields.nloc(), 1);
    }
}
