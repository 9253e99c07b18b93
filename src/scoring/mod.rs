pub mod allocation;
pub mod engine;
pub mod validation;

pub use allocation::{allocated_strokes, HoleStrokeAllocation};
pub use engine::{net_par, par_score, score_hole, stableford_points, stroke_score, HoleScore};
pub use validation::{validate_card, validate_hole, MAX_HOLE_STROKES};
