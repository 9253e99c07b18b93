use serde::{Deserialize, Serialize};

use crate::scoring::HoleStrokeAllocation;

/// A round scorecard for one or more players on the same course.
///
/// Holes come either from a course named in the config file or inline.
///
/// Example YAML:
/// ```yaml
/// course: Links
/// players:
///   - name: Alice
///     handicap: 12.4
///     strokes: [5, 4, 3, ~, 6]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scorecard {
    #[serde(default)]
    pub course: Option<String>,

    #[serde(default)]
    pub holes: Option<Vec<HoleStrokeAllocation>>,

    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerEntry {
    pub name: String,

    /// Course handicap; falls back to the config default when absent
    #[serde(default)]
    pub handicap: Option<f64>,

    /// Gross strokes per hole in course order; `~` marks an unplayed hole
    #[serde(default)]
    pub strokes: Vec<Option<u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_with_course_name() {
        let yaml = r#"
course: Links
players:
  - name: Alice
    handicap: 12.4
    strokes: [5, 4, ~, 6]
"#;
        let card: Scorecard = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(card.course.as_deref(), Some("Links"));
        assert!(card.holes.is_none());

        let alice = &card.players[0];
        assert_eq!(alice.handicap, Some(12.4));
        assert_eq!(alice.strokes, vec![Some(5), Some(4), None, Some(6)]);
    }

    #[test]
    fn test_parse_card_with_inline_holes() {
        let yaml = r#"
holes:
  - { par: 4, index1: 1, index2: 19 }
players:
  - name: Bob
"#;
        let card: Scorecard = serde_saphyr::from_str(yaml).unwrap();
        let holes = card.holes.unwrap();
        assert_eq!(holes[0], HoleStrokeAllocation::new(4, 1, 19, 0));
        assert!(card.players[0].handicap.is_none());
        assert!(card.players[0].strokes.is_empty());
    }

    #[test]
    fn test_card_requires_players() {
        let result: Result<Scorecard, _> = serde_saphyr::from_str("course: Links");
        assert!(result.is_err());
    }
}
