use serde::{Deserialize, Serialize};

use crate::utils::{
    linspace, DesignError, DesignResult, LOAD_FACTOR_SAMPLES, MAX_NEGATIVE_LIMIT_LOAD_FACTOR,
    MIN_POSITIVE_LIMIT_LOAD_FACTOR,
};

/// Side of the V-n diagram a curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Positive,
    Negative,
}

impl Branch {
    /// The 1g (or -1g) load factor every curve on this branch starts from.
    pub fn unit_load_factor(&self) -> f64 {
        match self {
            Branch::Positive => 1.0,
            Branch::Negative => -1.0,
        }
    }

    /// Whether `n` lies on this side of the diagram.
    pub fn contains(&self, n: f64) -> bool {
        match self {
            Branch::Positive => n >= 0.0,
            Branch::Negative => n <= 0.0,
        }
    }
}

/// Load factor samples from 1g (or -1g) to the limit manoeuvring load factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadFactorCurve {
    pub branch: Branch,
    pub limit: f64,
    pub samples: Vec<f64>,
}

impl LoadFactorCurve {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

/// Calculates load factor values along the stall curve for the flight envelope.
///
/// A positive limit yields samples from 1.0 to `n_limit`, a negative limit
/// from -1.0 to `n_limit`, both inclusive. Limits within 1g of zero cannot
/// form a monotonic curve and are rejected.
pub fn generate_load_factors(n_limit: f64) -> DesignResult<LoadFactorCurve> {
    if !n_limit.is_finite() || n_limit == 0.0 {
        return Err(DesignError::InvalidInput(format!(
            "limit load factor must be finite and non-zero, got {}",
            n_limit
        )));
    }
    if n_limit.abs() <= 1.0 {
        return Err(DesignError::InvalidInput(format!(
            "limit load factor must exceed 1g in magnitude, got {}",
            n_limit
        )));
    }

    let branch = if n_limit > 0.0 {
        Branch::Positive
    } else {
        Branch::Negative
    };

    Ok(LoadFactorCurve {
        branch,
        limit: n_limit,
        samples: linspace(branch.unit_load_factor(), n_limit, LOAD_FACTOR_SAMPLES),
    })
}

/// CS-VLA 337 floors on the limit manoeuvring load factors.
///
/// (a) the positive limit may not be less than 3.8;
/// (b) the negative limit may not be less than 1.5 in magnitude.
pub fn check_limit_load_factors(nmax: f64, nmin: f64) -> DesignResult<()> {
    if nmax.is_nan() || nmax < MIN_POSITIVE_LIMIT_LOAD_FACTOR {
        return Err(DesignError::RegulatoryViolation(format!(
            "positive limit load factor {} is below the CS-VLA 337 minimum of {}",
            nmax, MIN_POSITIVE_LIMIT_LOAD_FACTOR
        )));
    }
    if nmin.is_nan() || nmin > MAX_NEGATIVE_LIMIT_LOAD_FACTOR {
        return Err(DesignError::RegulatoryViolation(format!(
            "negative limit load factor {} is above the CS-VLA 337 maximum of {}",
            nmin, MAX_NEGATIVE_LIMIT_LOAD_FACTOR
        )));
    }
    Ok(())
}
