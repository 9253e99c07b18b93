use serde::Serialize;

use super::allocation::{allocated_strokes, HoleStrokeAllocation};

/// Stableford points awarded for exactly net par.
const STABLEFORD_NET_PAR_POINTS: f64 = 2.0;

/// All per-hole metrics for one player, derived from a single net par.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HoleScore {
    pub strokes: u32,
    pub net_par: f64,
    pub par_score: f64,
    pub stroke_score: f64,
    pub stableford: f64,
}

/// Par adjusted by the strokes `handicap` allocates (or concedes) on this hole.
pub fn net_par(hole: &HoleStrokeAllocation, handicap: f64) -> f64 {
    f64::from(hole.par) + f64::from(allocated_strokes(hole, handicap))
}

/// Beat / matched / missed net par as `1.0`, `0.0` or `-1.0`.
pub fn par_score(strokes: u32, hole: &HoleStrokeAllocation, handicap: f64) -> f64 {
    par_differential(net_par(hole, handicap), strokes)
}

/// Strokes over net par, unclamped. Positive is worse.
pub fn stroke_score(strokes: u32, hole: &HoleStrokeAllocation, handicap: f64) -> f64 {
    stroke_differential(net_par(hole, handicap), strokes)
}

/// Stableford points: two for net par, one more per stroke under, floored at zero.
pub fn stableford_points(hole: &HoleStrokeAllocation, handicap: f64, strokes: u32) -> f64 {
    stableford_from_net_par(net_par(hole, handicap), strokes)
}

/// Compute every metric for a hole from one shared net par.
pub fn score_hole(hole: &HoleStrokeAllocation, handicap: f64, strokes: u32) -> HoleScore {
    let net_par = net_par(hole, handicap);
    HoleScore {
        strokes,
        net_par,
        par_score: par_differential(net_par, strokes),
        stroke_score: stroke_differential(net_par, strokes),
        stableford: stableford_from_net_par(net_par, strokes),
    }
}

fn par_differential(net_par: f64, strokes: u32) -> f64 {
    (net_par - f64::from(strokes)).clamp(-1.0, 1.0)
}

fn stroke_differential(net_par: f64, strokes: u32) -> f64 {
    f64::from(strokes) - net_par
}

fn stableford_from_net_par(net_par: f64, strokes: u32) -> f64 {
    (STABLEFORD_NET_PAR_POINTS + net_par - f64::from(strokes)).max(0.0)
}
