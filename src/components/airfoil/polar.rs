use serde::{Deserialize, Serialize};

use crate::utils::{DesignError, DesignResult};

/// One row of a section polar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarRow {
    /// Angle of attack (deg).
    pub alpha: f64,
    pub cl: f64,
    pub cd: f64,
    pub cm: f64,
}

impl PolarRow {
    pub fn new(alpha: f64, cl: f64, cd: f64, cm: f64) -> Self {
        Self { alpha, cl, cd, cm }
    }
}

/// Tabulated section polar, rows kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirfoilPolar {
    pub rows: Vec<PolarRow>,
}

impl AirfoilPolar {
    pub fn new(rows: Vec<PolarRow>) -> Self {
        Self { rows }
    }

    /// Builds a polar from parallel columns, which must share one length.
    pub fn from_columns(alpha: &[f64], cl: &[f64], cd: &[f64], cm: &[f64]) -> DesignResult<Self> {
        let len = alpha.len();
        if cl.len() != len || cd.len() != len || cm.len() != len {
            return Err(DesignError::InvalidInput(format!(
                "polar columns differ in length: Alpha {}, Cl {}, Cd {}, Cm {}",
                len,
                cl.len(),
                cd.len(),
                cm.len()
            )));
        }

        let rows = (0..len)
            .map(|i| PolarRow::new(alpha[i], cl[i], cd[i], cm[i]))
            .collect();
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the row at exactly zero angle of attack.
    pub fn zero_alpha_index(&self) -> DesignResult<usize> {
        self.rows
            .iter()
            .position(|row| row.alpha == 0.0)
            .ok_or_else(|| {
                DesignError::NotFound(format!(
                    "no row with Alpha = 0 among {} polar rows",
                    self.rows.len()
                ))
            })
    }

    /// Maximum section lift coefficient and the angle it occurs at.
    pub fn cl_max(&self) -> Option<(f64, f64)> {
        self.rows.iter().fold(None, |best, row| match best {
            Some((_, cl)) if cl >= row.cl => best,
            _ => Some((row.alpha, row.cl)),
        })
    }
}
