//! Schrenk approximation of the spanwise lift distribution.
//!
//! The spanwise loading of an unswept wing does not differ much from an
//! elliptic distribution even for a strongly non-elliptic planform, so the
//! load is taken as the mean of the chord distribution and an ellipse of equal
//! area.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

use crate::components::wing::planform::WingPlanform;
use crate::utils::{linspace, trapezoid, DesignError, DesignResult};

/// Values at a single spanwise station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanwiseStation {
    pub y: f64,
    pub eta: f64,
    pub chord: f64,
    pub elliptical_load: f64,
    pub schrenk_load: f64,
    pub unit_lift_coefficient: f64,
}

/// Spanwise load over the semi-span.
///
/// Stations run tip to root: index 0 is the tip (η = 1) and the last index
/// the root (η = 0). Loads are chord-times-lift-coefficient, c·Cl (m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanwiseLoadProfile {
    /// Station across the semi-span (m).
    pub y: DVector<f64>,
    /// Non-dimensional station, y / (b/2).
    pub eta: DVector<f64>,
    /// Chord distribution (m).
    pub chord: DVector<f64>,
    /// Elliptical reference load.
    pub elliptical_load: DVector<f64>,
    /// Mean of the chord distribution and elliptical load.
    pub schrenk_load: DVector<f64>,
    /// Schrenk load divided by the local chord.
    pub unit_lift_coefficient: DVector<f64>,
}

/// Schrenk load for a straight-tapered wing.
///
/// # Arguments
/// * `b` - Wing span (m).
/// * `s` - Wing area (m²).
/// * `c_root` / `c_tip` - Root and tip chords (m).
/// * `n_stations` - Number of stations across the semi-span.
pub fn schrenk_load(
    b: f64,
    s: f64,
    c_root: f64,
    c_tip: f64,
    n_stations: usize,
) -> DesignResult<SpanwiseLoadProfile> {
    let planform = WingPlanform::new(b, s, c_root, c_tip)?;
    SpanwiseLoadProfile::compute(&planform, n_stations)
}

impl SpanwiseLoadProfile {
    pub fn compute(planform: &WingPlanform, n_stations: usize) -> DesignResult<Self> {
        if n_stations < 2 {
            return Err(DesignError::InvalidInput(format!(
                "at least 2 spanwise stations are required, got {}",
                n_stations
            )));
        }

        let semi_span = planform.semi_span();
        let taper = planform.taper_ratio();
        let chord_scale = planform.equivalent_root_chord();
        if (chord_scale - planform.root_chord).abs() > 0.01 * planform.root_chord {
            warn!(
                "Root chord {:.4} m differs from 2S/((1+taper)b) = {:.4} m; chord distribution follows the area",
                planform.root_chord, chord_scale
            );
        }

        let mut stations = linspace(0.0, semi_span, n_stations);
        stations.reverse();
        let y = DVector::from_vec(stations);
        let eta = y.map(|y| y / semi_span);

        let chord = eta.map(|eta| chord_scale * (1.0 - (1.0 - taper) * eta.abs()));
        if let Some(i) = chord.iter().position(|&c| c <= 0.0) {
            return Err(DesignError::DomainError(format!(
                "chord vanishes at eta = {}",
                eta[i]
            )));
        }

        let ellipse_height = 4.0 * planform.area / (PI * planform.span);
        let elliptical_load = eta.map(|eta| ellipse_height * (1.0 - eta * eta).max(0.0).sqrt());
        let schrenk_load = (&chord + &elliptical_load) * 0.5;
        let unit_lift_coefficient = schrenk_load.component_div(&chord);

        debug!(
            "Schrenk load over {} stations: taper = {:.3}, ellipse height = {:.4} m",
            n_stations, taper, ellipse_height
        );

        Ok(Self {
            y,
            eta,
            chord,
            elliptical_load,
            schrenk_load,
            unit_lift_coefficient,
        })
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn station(&self, i: usize) -> Option<SpanwiseStation> {
        if i >= self.len() {
            return None;
        }
        Some(SpanwiseStation {
            y: self.y[i],
            eta: self.eta[i],
            chord: self.chord[i],
            elliptical_load: self.elliptical_load[i],
            schrenk_load: self.schrenk_load[i],
            unit_lift_coefficient: self.unit_lift_coefficient[i],
        })
    }

    pub fn tip(&self) -> Option<SpanwiseStation> {
        self.station(0)
    }

    pub fn root(&self) -> Option<SpanwiseStation> {
        self.len().checked_sub(1).and_then(|i| self.station(i))
    }

    /// Schrenk load integrated over the semi-span (m²); equals S/2 for a
    /// planform whose chords match its area.
    pub fn integrated_load(&self) -> f64 {
        trapezoid(self.y.as_slice(), self.schrenk_load.as_slice()).abs()
    }

    /// Station of maximum unit lift coefficient, where stall would begin.
    pub fn peak_unit_lift_coefficient(&self) -> Option<SpanwiseStation> {
        let (index, _) = self.unit_lift_coefficient.iter().enumerate().fold(
            (None, f64::NEG_INFINITY),
            |(best, max), (i, &cl)| {
                if cl > max {
                    (Some(i), cl)
                } else {
                    (best, max)
                }
            },
        );
        index.and_then(|i| self.station(i))
    }
}
