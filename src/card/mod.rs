pub mod round;
pub mod types;

pub use round::{
    load_card, resolve_holes, score_card, score_round, HoleResult, RoundResult, RoundTotals,
    SegmentTotals,
};
pub use types::{PlayerEntry, Scorecard};
