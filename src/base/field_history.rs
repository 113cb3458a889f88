use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Indicates the kind of spatial entity associated with the columns of a field history
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LocationKind {
    /// Mesh node (averaged or extrapolated values)
    Node,

    /// Finite element (element-averaged values)
    Element,

    /// Gauss (integration) point
    IntegrationPoint,
}

/// Holds the aligned stress/strain histories required by the VGI integrator
///
/// The three matrices are indexed `[step][location]`: each row is one recorded
/// state of the loading history (row 0 = initial, unloaded state; strictly
/// increasing row index = monotonically advancing simulated history) and each
/// column corresponds to one entry of `labels`. All three matrices must share
/// identical dimensions and row ordering.
///
/// A FieldHistory is produced once per analysis run from the simulation output
/// and is immutable afterward.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldHistory {
    /// von Mises equivalent stress (nstep, nloc)
    pub mises: Matrix,

    /// Hydrostatic pressure (nstep, nloc)
    pub pressure: Matrix,

    /// Equivalent plastic strain (nstep, nloc)
    pub peeq: Matrix,

    /// The kind of spatial entity in the columns
    pub kind: LocationKind,

    /// Location labels matching the columns (nloc)
    pub labels: Vec<usize>,
}

impl FieldHistory {
    /// Allocates a new instance, checking that all matrices are compatible
    ///
    /// # Input
    ///
    /// * `mises` -- von Mises stress history (nstep, nloc)
    /// * `pressure` -- hydrostatic pressure history (nstep, nloc)
    /// * `peeq` -- equivalent plastic strain history (nstep, nloc)
    /// * `kind` -- the kind of spatial entity in the columns
    /// * `labels` -- the location labels, ordered as the columns (nloc)
    pub fn new(
        mises: Matrix,
        pressure: Matrix,
        peeq: Matrix,
        kind: LocationKind,
        labels: Vec<usize>,
    ) -> Result<Self, StrError> {
        if mises.dims() != pressure.dims() || pressure.dims() != peeq.dims() {
            return Err("mises, pressure, and peeq matrices must all have the same dimensions");
        }
        let (_, nloc) = mises.dims();
        if labels.len() != nloc {
            return Err("the number of location labels must match the number of columns");
        }
        Ok(FieldHistory {
            mises,
            pressure,
            peeq,
            kind,
            labels,
        })
    }

    /// Returns the number of recorded steps (rows)
    pub fn nstep(&self) -> usize {
        self.mises.dims().0
    }

    /// Returns the number of spatial locations (columns)
    pub fn nloc(&self) -> usize {
        self.mises.dims().1
    }

    /// Reads a JSON file containing a FieldHistory
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "cannot open field history file")?;
        let reader = BufReader::new(file);
        let history: FieldHistory = serde_json::from_reader(reader).map_err(|_| "cannot parse field history file")?;
        if history.mises.dims() != history.pressure.dims() || history.pressure.dims() != history.peeq.dims() {
            return Err("field history file contains matrices with inconsistent dimensions");
        }
        if history.labels.len() != history.mises.dims().1 {
            return Err("field history file contains an inconsistent number of location labels");
        }
        Ok(history)
    }

    /// Writes a JSON file with this FieldHistory
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p).map_err(|_| "cannot create directory for field history file")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create field history file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write field history file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
