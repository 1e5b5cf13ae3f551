use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::envelope::load_factor::Branch;
use crate::components::envelope::stall::StallSpeedCurve;
use crate::utils::{nearest_index, DesignError, DesignResult, LANDMARK_TOLERANCE};

/// A point of the V-n diagram: airspeed (m/s) against load factor (g).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub v: f64,
    pub n: f64,
}

impl EnvelopePoint {
    pub fn new(v: f64, n: f64) -> Self {
        Self { v, n }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    PositiveStall,
    PositiveLimit,
    Dive,
    NegativeLimit,
    NegativeStall,
    NegativeClosure,
    PositiveClosure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSegment {
    pub kind: SegmentKind,
    pub points: Vec<EnvelopePoint>,
}

/// Closed boundary of the V-n diagram, CS-VLA 333.
///
/// Segments are stored in traversal order, starting at the 1g stall point and
/// running clockwise in the (V, n) plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeBoundary {
    pub segments: Vec<EnvelopeSegment>,
}

/// Indices delimiting the stall-limited part of one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StallLandmarks {
    unit: usize,
    limit: usize,
}

fn locate_landmarks(curve: &StallSpeedCurve, limit: f64) -> DesignResult<StallLandmarks> {
    let unit = nearest_index(
        &curve.load_factors,
        curve.branch.unit_load_factor(),
        LANDMARK_TOLERANCE,
    )?;
    let limit = nearest_index(&curve.load_factors, limit, LANDMARK_TOLERANCE)?;
    Ok(StallLandmarks { unit, limit })
}

fn stall_points(curve: &StallSpeedCurve, from: usize, to: usize) -> Vec<EnvelopePoint> {
    let point = |i: usize| EnvelopePoint::new(curve.speeds[i], curve.load_factors[i]);
    if from <= to {
        (from..=to).map(point).collect()
    } else {
        (to..=from).rev().map(point).collect()
    }
}

fn check_curve(curve: &StallSpeedCurve, branch: Branch) -> DesignResult<()> {
    if curve.branch != branch {
        return Err(DesignError::InvalidInput(format!(
            "expected a {:?} stall curve, got {:?}",
            branch, curve.branch
        )));
    }
    if curve.load_factors.len() != curve.speeds.len() || curve.is_empty() {
        return Err(DesignError::InvalidInput(format!(
            "stall curve has {} load factors and {} speeds",
            curve.load_factors.len(),
            curve.speeds.len()
        )));
    }
    Ok(())
}

impl EnvelopeBoundary {
    /// Assembles the envelope from both stall curves and the limit lines.
    ///
    /// # Arguments
    /// * `positive` / `negative` - Stall curves of each branch.
    /// * `nmax` / `nmin` - Limit manoeuvring load factors.
    /// * `vd` - Design dive speed, end of the positive limit line.
    /// * `vg` - End of the negative limit line.
    pub fn assemble(
        positive: &StallSpeedCurve,
        negative: &StallSpeedCurve,
        nmax: f64,
        nmin: f64,
        vd: f64,
        vg: f64,
    ) -> DesignResult<Self> {
        check_curve(positive, Branch::Positive)?;
        check_curve(negative, Branch::Negative)?;

        let pos = locate_landmarks(positive, nmax)?;
        let neg = locate_landmarks(negative, nmin)?;
        debug!(
            "Stall landmarks: positive 1g={} nmax={}, negative -1g={} nmin={}",
            pos.unit, pos.limit, neg.unit, neg.limit
        );

        let v_a = positive.speeds[pos.limit];
        let v_g_stall = negative.speeds[neg.limit];
        if v_a > vd {
            warn!(
                "Manoeuvring speed {:.2} m/s exceeds dive speed {:.2} m/s; positive limit line is reversed",
                v_a, vd
            );
        }
        if v_g_stall > vg {
            warn!(
                "Negative stall speed {:.2} m/s exceeds {:.2} m/s; negative limit line is reversed",
                v_g_stall, vg
            );
        }

        let vs_pos = positive.speeds[pos.unit];
        let vs_neg = negative.speeds[neg.unit];

        let segments = vec![
            EnvelopeSegment {
                kind: SegmentKind::PositiveStall,
                points: stall_points(positive, pos.unit, pos.limit),
            },
            EnvelopeSegment {
                kind: SegmentKind::PositiveLimit,
                points: vec![EnvelopePoint::new(v_a, nmax), EnvelopePoint::new(vd, nmax)],
            },
            EnvelopeSegment {
                kind: SegmentKind::Dive,
                points: vec![EnvelopePoint::new(vd, nmax), EnvelopePoint::new(vg, nmin)],
            },
            EnvelopeSegment {
                kind: SegmentKind::NegativeLimit,
                points: vec![
                    EnvelopePoint::new(vg, nmin),
                    EnvelopePoint::new(v_g_stall, nmin),
                ],
            },
            EnvelopeSegment {
                kind: SegmentKind::NegativeStall,
                points: stall_points(negative, neg.limit, neg.unit),
            },
            EnvelopeSegment {
                kind: SegmentKind::NegativeClosure,
                points: vec![
                    EnvelopePoint::new(vs_neg, negative.load_factors[neg.unit]),
                    EnvelopePoint::new(vs_neg, 0.0),
                ],
            },
            EnvelopeSegment {
                kind: SegmentKind::PositiveClosure,
                points: vec![
                    EnvelopePoint::new(vs_pos, 0.0),
                    EnvelopePoint::new(vs_pos, positive.load_factors[pos.unit]),
                ],
            },
        ];

        Ok(Self { segments })
    }

    pub fn segment(&self, kind: SegmentKind) -> Option<&EnvelopeSegment> {
        self.segments.iter().find(|segment| segment.kind == kind)
    }

    /// The boundary as one closed point sequence.
    ///
    /// Consecutive duplicate points are dropped and the first point is repeated
    /// at the end.
    pub fn polyline(&self) -> Vec<EnvelopePoint> {
        let mut points: Vec<EnvelopePoint> = Vec::new();
        for point in self.segments.iter().flat_map(|segment| segment.points.iter()) {
            if points.last() != Some(point) {
                points.push(*point);
            }
        }
        if let Some(&first) = points.first() {
            if points.last() != Some(&first) {
                points.push(first);
            }
        }
        points
    }
}
