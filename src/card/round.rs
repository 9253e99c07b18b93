use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::types::Scorecard;
use crate::config::Config;
use crate::scoring::{score_hole, HoleScore, HoleStrokeAllocation};

/// Holes in the front nine (OUT).
const FRONT_NINE: usize = 9;

/// One row of a player's round: the hole, and its score if played.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HoleResult {
    pub number: usize,
    pub hole: HoleStrokeAllocation,
    pub score: Option<HoleScore>,
}

/// Sums of per-hole metrics over the played holes of a segment.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct SegmentTotals {
    pub holes_played: usize,
    pub strokes: u64,
    pub net_par: f64,
    pub par_score: f64,
    pub stroke_score: f64,
    pub stableford: f64,
}

impl SegmentTotals {
    fn add(&mut self, score: &HoleScore) {
        self.holes_played += 1;
        self.strokes += u64::from(score.strokes);
        self.net_par += score.net_par;
        self.par_score += score.par_score;
        self.stroke_score += score.stroke_score;
        self.stableford += score.stableford;
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct RoundTotals {
    pub out: SegmentTotals,
    #[serde(rename = "in")]
    pub inward: SegmentTotals,
    pub total: SegmentTotals,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoundResult {
    pub player: String,
    pub handicap: f64,
    pub holes: Vec<HoleResult>,
    pub totals: RoundTotals,
    /// True when at least one hole has no recorded score
    pub incomplete: bool,
}

/// Score a player's round hole by hole and total OUT / IN / TOTAL.
///
/// `strokes[i]` is the gross score on `holes[i]`; missing or `None` entries
/// are unplayed and left out of the totals.
pub fn score_round(
    player: &str,
    holes: &[HoleStrokeAllocation],
    handicap: f64,
    strokes: &[Option<u32>],
) -> RoundResult {
    let mut totals = RoundTotals::default();
    let mut incomplete = false;

    let results = holes
        .iter()
        .enumerate()
        .map(|(position, hole)| {
            let score = strokes
                .get(position)
                .copied()
                .flatten()
                .map(|s| score_hole(hole, handicap, s));

            match &score {
                Some(s) => {
                    if position < FRONT_NINE {
                        totals.out.add(s);
                    } else {
                        totals.inward.add(s);
                    }
                    totals.total.add(s);
                }
                None => incomplete = true,
            }

            HoleResult {
                number: position + 1,
                hole: *hole,
                score,
            }
        })
        .collect();

    RoundResult {
        player: player.to_string(),
        handicap,
        holes: results,
        totals,
        incomplete,
    }
}

/// Score every player on a card against `holes`.
///
/// Players without their own handicap use `default_handicap`; callers are
/// expected to have validated the card first, so a player with neither is
/// scored off scratch.
pub fn score_card(
    card: &Scorecard,
    holes: &[HoleStrokeAllocation],
    default_handicap: Option<f64>,
) -> Vec<RoundResult> {
    card.players
        .iter()
        .map(|p| {
            let handicap = p.handicap.or(default_handicap).unwrap_or(0.0);
            score_round(&p.name, holes, handicap, &p.strokes)
        })
        .collect()
}

/// Holes the card is played on: inline holes, or the named course from config
pub fn resolve_holes<'a>(
    card: &'a Scorecard,
    config: &'a Config,
) -> Result<&'a [HoleStrokeAllocation]> {
    if let Some(ref holes) = card.holes {
        return Ok(holes.as_slice());
    }
    match card.course {
        Some(ref name) => config
            .course(name)
            .map(|c| c.holes.as_slice())
            .with_context(|| format!("Unknown course '{}'", name)),
        None => anyhow::bail!("Scorecard has neither 'course' nor 'holes'"),
    }
}

/// Load a scorecard from a YAML file
pub fn load_card(path: &Path) -> Result<Scorecard> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scorecard at {}", path.display()))?;

    let card: Scorecard = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse scorecard: invalid YAML in {}", path.display()))?;

    Ok(card)
}
