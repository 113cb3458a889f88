use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Indicates the start convention of the simulation variable behind a load history
///
/// Field-type variables (e.g., displacements) report a value at step 0, whereas
/// history-type variables (e.g., contour-integral/J values) conventionally begin
/// recording at the first nonzero step. The latter must be left-padded with one
/// leading zero so that a step index found in the load history addresses the
/// same physical step in the VGI history.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LoadConvention {
    /// The variable reports a value at step 0 (e.g., nodal displacement)
    FieldVariable,

    /// The variable starts at the first nonzero step (e.g., J-integral)
    HistoryVariable,
}

/// Holds a scalar load/response history aligned step-for-step with the VGI rows
///
/// One value per recorded step: an applied displacement, an LVDT-derived relative
/// displacement, or a (padded) fracture parameter such as the J-integral.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadHistory {
    values: Vector,
}

impl LoadHistory {
    /// Allocates a new instance from a field-type variable (value present at step 0)
    pub fn from_field_variable(values: Vector) -> Self {
        LoadHistory { values }
    }

    /// Allocates a new instance from a history-type variable
    ///
    /// History-type variables start recording at the first nonzero step, thus the
    /// series is left-padded with exactly one leading zero to align its indices
    /// with the rows of field-derived quantities such as the VGI history.
    pub fn from_history_variable(values: &Vector) -> Self {
        let n = values.dim();
        let mut padded = Vector::new(n + 1);
        for i in 0..n {
            padded[i + 1] = values[i];
        }
        LoadHistory { values: padded }
    }

    /// Allocates a new instance from a pair of LVDT displacement series
    ///
    /// Computes the elementwise absolute difference |top - bottom|, i.e., the
    /// relative displacement measured between the two LVDT mounting points.
    pub fn from_lvdt_pair(top: &Vector, bottom: &Vector) -> Result<Self, StrError> {
        if top.dim() != bottom.dim() {
            return Err("the two LVDT series must have the same number of steps");
        }
        let mut values = Vector::new(top.dim());
        for i in 0..top.dim() {
            values[i] = f64::abs(top[i] - bottom[i]);
        }
        Ok(LoadHistory { values })
    }

    /// Allocates a new instance from raw values and a start convention
    pub fn new(values: &[f64], convention: LoadConvention) -> Self {
        match convention {
            LoadConvention::FieldVariable => LoadHistory::from_field_variable(Vector::from(&values)),
            LoadConvention::HistoryVariable => LoadHistory::from_history_variable(&Vector::from(&values)),
        }
    }

    /// Returns access to the (possibly padded) values
    pub fn values(&self) -> &Vector {
        &self.values
    }

    /// Returns the number of steps
    pub fn nstep(&self) -> usize {
        self.values.dim()
    }

    /// Checks that this load history is aligned with a VGI history of `nstep` rows
    pub fn check_alignment(&self, nstep: usize) -> Result<(), StrError> {
        if self.values.dim() != nstep {
            return Err("load history is not aligned step-for-step with the VGI history");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
