use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::card::{HoleResult, RoundResult, SegmentTotals};
use crate::scoring::{HoleScore, HoleStrokeAllocation};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a metric value; whole numbers drop the decimal point, fractions
/// keep every digit (e.g., "4", "-1", "12.45")
pub fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Like `format_points` but always carries a sign ("+2", "-1", "0")
pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_points(value))
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format_points(value)
    }
}

/// Format a single hole's metrics with detailed multi-line output
pub fn format_hole_detail(
    hole: &HoleStrokeAllocation,
    handicap: f64,
    score: &HoleScore,
    use_colors: bool,
) -> String {
    let indices = format_indices(hole);
    let handicap = format_points(handicap);
    let net_par = format_points(score.net_par);
    let par_score = format_signed(score.par_score);
    let stroke_score = format_signed(score.stroke_score);
    let stableford = format_points(score.stableford);

    if use_colors {
        format!(
            "Par {} (SI {}), handicap {}, {} strokes\n  Net par: {}\n  Par score: {}\n  Stroke score: {}\n  Stableford: {}",
            hole.par.bold(),
            indices.cyan(),
            handicap.yellow(),
            score.strokes,
            net_par.bold(),
            par_score,
            stroke_score,
            stableford.green()
        )
    } else {
        format!(
            "Par {} (SI {}), handicap {}, {} strokes\n  Net par: {}\n  Par score: {}\n  Stroke score: {}\n  Stableford: {}",
            hole.par,
            indices,
            handicap,
            score.strokes,
            net_par,
            par_score,
            stroke_score,
            stableford
        )
    }
}

/// Stroke indices as "10/28/46", leaving out disabled rounds
fn format_indices(hole: &HoleStrokeAllocation) -> String {
    [hole.index1, hole.index2, hole.index3]
        .iter()
        .enumerate()
        .filter(|&(i, &index)| i == 0 || index != 0)
        .map(|(_, index)| index.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

const TABLE_HEADER: [&str; 8] = ["Hole", "Par", "SI", "Gross", "Net", "Par±", "Str±", "Pts"];
const COLUMN_WIDTH: usize = 6;

fn hole_cells(result: &HoleResult) -> [String; 8] {
    let (gross, net, par_score, stroke_score, points) = match &result.score {
        Some(s) => (
            s.strokes.to_string(),
            format_points(s.net_par),
            format_signed(s.par_score),
            format_signed(s.stroke_score),
            format_points(s.stableford),
        ),
        None => (
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
            "-".to_string(),
        ),
    };
    [
        result.number.to_string(),
        result.hole.par.to_string(),
        result.hole.index1.to_string(),
        gross,
        net,
        par_score,
        stroke_score,
        points,
    ]
}

fn segment_cells(label: &str, par: u32, totals: &SegmentTotals) -> [String; 8] {
    [
        label.to_string(),
        par.to_string(),
        String::new(),
        totals.strokes.to_string(),
        format_points(totals.net_par),
        format_signed(totals.par_score),
        format_signed(totals.stroke_score),
        format_points(totals.stableford),
    ]
}

/// Rows for every hole followed by OUT, IN (18-hole rounds only) and TOTAL
fn round_rows(result: &RoundResult) -> Vec<[String; 8]> {
    let mut rows: Vec<[String; 8]> = result.holes.iter().map(hole_cells).collect();

    let par_of = |range: std::ops::Range<usize>| -> u32 {
        result
            .holes
            .iter()
            .filter(|h| range.contains(&(h.number - 1)))
            .map(|h| h.hole.par)
            .sum()
    };

    rows.push(segment_cells("OUT", par_of(0..9), &result.totals.out));
    if result.holes.len() > 9 {
        rows.push(segment_cells("IN", par_of(9..result.holes.len()), &result.totals.inward));
    }
    rows.push(segment_cells(
        "TOTAL",
        par_of(0..result.holes.len()),
        &result.totals.total,
    ));
    rows
}

fn pad_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| format!("{:>width$}", c, width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join("")
}

/// Format a player's round as an aligned table with a title line and header
/// Unscored holes show "-"; an incomplete round is marked with an asterisk
pub fn format_round_table(result: &RoundResult, use_colors: bool) -> String {
    let marker = if result.incomplete { "*" } else { "" };
    let title = format!(
        "{} (handicap {}){}",
        result.player,
        format_points(result.handicap),
        marker
    );
    let header = pad_row(&TABLE_HEADER.map(String::from));
    let rows = round_rows(result);
    let hole_count = result.holes.len();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if use_colors {
        lines.push(title.bold().to_string());
        lines.push(header.dimmed().to_string());
    } else {
        lines.push(title);
        lines.push(header);
    }

    for (i, row) in rows.iter().enumerate() {
        let line = pad_row(row);
        if use_colors && i >= hole_count {
            lines.push(line.bold().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format a player's round as tab-separated values for scripting
/// Columns: player, hole, par, si, gross, net, par±, str±, pts (no headers, no colors)
pub fn format_round_tsv(result: &RoundResult) -> String {
    round_rows(result)
        .iter()
        .map(|row| format!("{}\t{}", result.player, row.join("\t")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format rounds as pretty-printed JSON
pub fn format_json(results: &[RoundResult]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
