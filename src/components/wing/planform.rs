use serde::{Deserialize, Serialize};

use crate::utils::{require_positive, DesignError, DesignResult};

/// Straight-tapered wing planform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingPlanform {
    /// Wing span b (m).
    pub span: f64,
    /// Reference wing area S (m²).
    pub area: f64,
    /// Root chord (m).
    pub root_chord: f64,
    /// Tip chord (m).
    pub tip_chord: f64,
}

impl WingPlanform {
    /// Creates a planform, rejecting non-physical geometry.
    ///
    /// A zero tip chord (pointed tip) is accepted here; it fails later where
    /// a quantity is divided by the local chord.
    pub fn new(span: f64, area: f64, root_chord: f64, tip_chord: f64) -> DesignResult<Self> {
        require_positive("wing span", span)?;
        require_positive("wing area", area)?;
        require_positive("root chord", root_chord)?;
        if !tip_chord.is_finite() || tip_chord < 0.0 {
            return Err(DesignError::InvalidInput(format!(
                "tip chord must be non-negative and finite, got {}",
                tip_chord
            )));
        }

        Ok(Self {
            span,
            area,
            root_chord,
            tip_chord,
        })
    }

    /// λ = c_tip / c_root
    pub fn taper_ratio(&self) -> f64 {
        self.tip_chord / self.root_chord
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.span * self.span / self.area
    }

    pub fn semi_span(&self) -> f64 {
        0.5 * self.span
    }

    /// Root chord of the trapezoid matching the reference area, `2S / ((1 + λ) b)`.
    pub fn equivalent_root_chord(&self) -> f64 {
        2.0 * self.area / ((1.0 + self.taper_ratio()) * self.span)
    }

    /// Mean aerodynamic chord of the trapezoid.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let taper = self.taper_ratio();
        2.0 / 3.0 * self.root_chord * (1.0 + taper + taper * taper) / (1.0 + taper)
    }
}
