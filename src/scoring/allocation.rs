use serde::{Deserialize, Serialize};

/// Stroke-index thresholds for a single hole.
///
/// `index1` is the hole's stroke index for the first 18 handicap strokes.
/// `index2` and `index3` govern the second and third allocation rounds and are
/// usually `index1 + 18` and `index1 + 36`, but they are compared against the
/// handicap as given. A value of `0` disables that round.
///
/// Example YAML:
/// ```yaml
/// { par: 4, index1: 10, index2: 28, index3: 46 }
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HoleStrokeAllocation {
    pub par: u32,
    pub index1: u32,
    #[serde(default)]
    pub index2: u32,
    #[serde(default)]
    pub index3: u32,
}

/// Stroke index `i` mirrors to `19 - i` for plus handicaps (18 concedes first).
const PLUS_MIRROR: f64 = 19.0;

impl HoleStrokeAllocation {
    pub fn new(par: u32, index1: u32, index2: u32, index3: u32) -> Self {
        Self {
            par,
            index1,
            index2,
            index3,
        }
    }

    /// Hole with the conventional second and third rounds (`+18`, `+36`).
    /// The derived indices saturate at `u32::MAX`.
    pub fn standard(par: u32, index1: u32) -> Self {
        Self::new(
            par,
            index1,
            index1.saturating_add(18),
            index1.saturating_add(36),
        )
    }

    /// Hole with only the first allocation round enabled.
    pub fn single_tier(par: u32, index1: u32) -> Self {
        Self::new(par, index1, 0, 0)
    }

    fn tiers(&self) -> [u32; 3] {
        [self.index1, self.index2, self.index3]
    }

    /// Number of enabled allocation rounds (non-zero indices).
    pub fn enabled_tiers(&self) -> usize {
        self.tiers().iter().filter(|&&i| i != 0).count()
    }
}

/// Handicap strokes the hole receives for `handicap`.
///
/// Positive or zero handicaps count the enabled indices that are `<= handicap`.
/// Negative (plus) handicaps concede a stroke on the easiest holes first: the
/// hole gives one back when `19 - index1 <= |handicap|`.
///
/// Below -18 it is unsettled whether the second and third rounds should also
/// concede. This function chooses not to: a hole concedes at most one stroke,
/// and that behavior is a decision rather than verified scoring practice.
pub fn allocated_strokes(hole: &HoleStrokeAllocation, handicap: f64) -> i32 {
    if handicap >= 0.0 {
        hole.tiers()
            .iter()
            .filter(|&&index| index != 0 && f64::from(index) <= handicap)
            .count() as i32
    } else if PLUS_MIRROR - f64::from(hole.index1) <= handicap.abs() {
        -1
    } else {
        0
    }
}
