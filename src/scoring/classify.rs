//! Kill switch and octant classification.

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::archetype::{Archetype, Level, Octant};
use super::axes::{Axis, AxisAverages};

/// `void_avg` at or above this forces [`Archetype::Void`].
pub const KILL_SWITCH_THRESHOLD: f64 = 5.5;

/// An axis mean at or above this is [`Level::High`].
pub const HIGH_THRESHOLD: f64 = 4.0;

/// Which rule produced the archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// `void_avg` crossed [`KILL_SWITCH_THRESHOLD`].
    KillSwitch,
    /// Resolved through the octant table.
    Octant(Octant),
    /// Table miss; fell back to `void`.
    Fallback,
}

/// Full scoring output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub archetype: Archetype,
    pub averages: AxisAverages,
    pub resolution: Resolution,
}

/// Binarize one axis mean; 4.0 and above is High.
pub fn level(score: f64) -> Level {
    if score >= HIGH_THRESHOLD {
        Level::High
    } else {
        Level::Low
    }
}

impl AxisAverages {
    /// Binarize the three primary axes.
    pub fn octant(&self) -> Octant {
        let [e, i, pi] = Axis::ALL.map(|axis| level(self.get(axis)));
        Octant::new(e, i, pi)
    }

    pub fn kill_switch(&self) -> bool {
        self.void_avg >= KILL_SWITCH_THRESHOLD
    }
}

/// Resolve an archetype from precomputed averages.
pub fn resolve(averages: &AxisAverages) -> (Archetype, Resolution) {
    if averages.kill_switch() {
        return (Archetype::Void, Resolution::KillSwitch);
    }

    let octant = averages.octant();
    match Archetype::from_octant(octant) {
        Some(archetype) => (archetype, Resolution::Octant(octant)),
        None => {
            log::warn!("no archetype for octant {}, falling back to void", octant);
            (Archetype::Void, Resolution::Fallback)
        }
    }
}

/// Steps 3–4 only: kill switch, then the octant table.
pub fn classify(averages: &AxisAverages) -> Archetype {
    resolve(averages).0
}

/// Steps 1–2 only: clamp every answer and average each axis.
pub fn axis_averages(answers: &AnswerSet) -> AxisAverages {
    AxisAverages::from_answers(answers)
}

/// Score a questionnaire.  Total over every input; never fails.
pub fn score(answers: &AnswerSet) -> ScoreReport {
    let averages = axis_averages(answers);
    let (archetype, resolution) = resolve(&averages);
    log::debug!(
        "scored e={:.3} i={:.3} pi={:.3} void={:.3} -> {} ({:?})",
        averages.e,
        averages.i,
        averages.pi,
        averages.void_avg,
        archetype,
        resolution
    );
    ScoreReport {
        archetype,
        averages,
        resolution,
    }
}

/// Archetype label only.
pub fn score_archetype(answers: &AnswerSet) -> Archetype {
    score(answers).archetype
}

// ============================================================================
// Tests
// ============================================================================
