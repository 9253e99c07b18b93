use super::allocation::HoleStrokeAllocation;
use crate::card::Scorecard;
use crate::config::Config;
use std::collections::HashSet;

/// Highest gross score accepted on a single hole.
pub const MAX_HOLE_STROKES: u32 = 99;

/// Check a single hole's preconditions. `path` prefixes each message.
///
/// The scoring functions accept any input; this is where callers reject
/// holes the arithmetic would score meaninglessly.
pub fn validate_hole(path: &str, hole: &HoleStrokeAllocation) -> Vec<String> {
    let mut errors = Vec::new();

    if hole.par == 0 {
        errors.push(format!("{}.par: must be positive", path));
    }
    if hole.index1 == 0 {
        errors.push(format!("{}.index1: must be non-zero", path));
    }

    errors
}

/// Validate a set of holes as a course layout.
fn validate_course(path: &str, holes: &[HoleStrokeAllocation]) -> Vec<String> {
    let mut errors = Vec::new();

    if holes.len() != 9 && holes.len() != 18 {
        errors.push(format!(
            "{}: expected 9 or 18 holes, found {}",
            path,
            holes.len()
        ));
    }

    let mut seen = HashSet::new();
    for (i, hole) in holes.iter().enumerate() {
        let hole_path = format!("{}[{}]", path, i);
        errors.extend(validate_hole(&hole_path, hole));
        if hole.index1 != 0 && !seen.insert(hole.index1) {
            errors.push(format!(
                "{}.index1: stroke index {} is used more than once",
                hole_path, hole.index1
            ));
        }
    }

    errors
}

/// Validate a scorecard against the loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_card(card: &Scorecard, config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Resolve the course layout
    let holes = match (&card.course, &card.holes) {
        (Some(_), Some(_)) => {
            errors.push("card: set either 'course' or 'holes', not both".to_string());
            None
        }
        (None, None) => {
            errors.push("card: one of 'course' or 'holes' is required".to_string());
            None
        }
        (Some(name), None) => match config.course(name) {
            Some(course) => {
                errors.extend(validate_course(
                    &format!("courses[{}].holes", course.name),
                    &course.holes,
                ));
                Some(course.holes.as_slice())
            }
            None => {
                errors.push(format!("card.course: unknown course '{}'", name));
                None
            }
        },
        (None, Some(holes)) => {
            errors.extend(validate_course("card.holes", holes));
            Some(holes.as_slice())
        }
    };

    if let Some(default) = config.handicap {
        if !default.is_finite() {
            errors.push("config.handicap: must be a finite number".to_string());
        }
    }

    if card.players.is_empty() {
        errors.push("card.players: at least one player is required".to_string());
    }

    for (i, player) in card.players.iter().enumerate() {
        match player.handicap.or(config.handicap) {
            Some(h) if !h.is_finite() => {
                errors.push(format!("card.players[{}].handicap: must be a finite number", i));
            }
            Some(_) => {}
            None => {
                errors.push(format!(
                    "card.players[{}].handicap: missing and no default handicap in config",
                    i
                ));
            }
        }

        if let Some(holes) = holes {
            if player.strokes.len() > holes.len() {
                errors.push(format!(
                    "card.players[{}].strokes: {} scores for a {}-hole course",
                    i,
                    player.strokes.len(),
                    holes.len()
                ));
            }
        }

        for (j, strokes) in player.strokes.iter().enumerate() {
            match *strokes {
                Some(0) => {
                    errors.push(format!(
                        "card.players[{}].strokes[{}]: must be positive",
                        i, j
                    ));
                }
                Some(s) if s > MAX_HOLE_STROKES => {
                    errors.push(format!(
                        "card.players[{}].strokes[{}]: {} exceeds the maximum of {}",
                        i, j, s, MAX_HOLE_STROKES
                    ));
                }
                _ => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::PlayerEntry;
    use crate::config::CourseConfig;

    fn nine_holes() -> Vec<HoleStrokeAllocation> {
        (1..=9)
            .map(|i| HoleStrokeAllocation::standard(4, i * 2 - 1))
            .collect()
    }

    fn player(handicap: Option<f64>, strokes: Vec<Option<u32>>) -> PlayerEntry {
        PlayerEntry {
            name: "Player".to_string(),
            handicap,
            strokes,
        }
    }

    fn inline_card(players: Vec<PlayerEntry>) -> Scorecard {
        Scorecard {
            course: None,
            holes: Some(nine_holes()),
            players,
        }
    }

    #[test]
    fn test_valid_hole() {
        assert!(validate_hole("hole", &HoleStrokeAllocation::standard(3, 18)).is_empty());
    }

    #[test]
    fn test_zero_par_and_index() {
        let errors = validate_hole("holes[2]", &HoleStrokeAllocation::new(0, 0, 0, 0));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("holes[2].par"));
        assert!(errors[1].contains("holes[2].index1"));
    }

    #[test]
    fn test_valid_inline_card() {
        let card = inline_card(vec![player(Some(12.0), vec![Some(4), None, Some(5)])]);
        assert!(validate_card(&card, &Config::default()).is_ok());
    }

    #[test]
    fn test_valid_named_course() {
        let config = Config {
            handicap: Some(8.0),
            courses: vec![CourseConfig {
                name: "Nine".to_string(),
                holes: nine_holes(),
            }],
        };
        let card = Scorecard {
            course: Some("nine".to_string()),
            holes: None,
            players: vec![player(None, vec![Some(4)])],
        };
        assert!(validate_card(&card, &config).is_ok());
    }

    #[test]
    fn test_unknown_course() {
        let card = Scorecard {
            course: Some("Nowhere".to_string()),
            holes: None,
            players: vec![player(Some(0.0), vec![])],
        };
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unknown course 'Nowhere'"));
    }

    #[test]
    fn test_course_and_holes_both_set() {
        let mut card = inline_card(vec![player(Some(0.0), vec![])]);
        card.course = Some("Nine".to_string());
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert!(errors[0].contains("not both"));
    }

    #[test]
    fn test_missing_handicap_without_default() {
        let card = inline_card(vec![player(None, vec![])]);
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert!(errors[0].contains("card.players[0].handicap"));
    }

    #[test]
    fn test_non_finite_handicap() {
        let card = inline_card(vec![player(Some(f64::NAN), vec![])]);
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_wrong_hole_count_and_duplicate_index() {
        let mut holes = nine_holes();
        holes.push(HoleStrokeAllocation::standard(4, 1));
        let card = Scorecard {
            course: None,
            holes: Some(holes),
            players: vec![player(Some(0.0), vec![])],
        };
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("expected 9 or 18 holes, found 10"));
        assert!(errors[1].contains("card.holes[9].index1"));
    }

    #[test]
    fn test_too_many_strokes_and_zero_strokes() {
        let mut strokes = vec![Some(4); 10];
        strokes[3] = Some(0);
        let card = inline_card(vec![player(Some(5.0), strokes)]);
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("10 scores for a 9-hole course"));
        assert!(errors[1].contains("card.players[0].strokes[3]"));
    }

    #[test]
    fn test_rejects_absurd_stroke_counts() {
        let card = inline_card(vec![player(Some(5.0), vec![Some(u32::MAX), Some(1), Some(99)])]);
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("card.players[0].strokes[0]"));
        assert!(errors[0].contains("maximum of 99"));

        let card = inline_card(vec![player(Some(5.0), vec![Some(100)])]);
        assert!(validate_card(&card, &Config::default()).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let card = Scorecard {
            course: None,
            holes: None, // Error 1
            players: vec![
                player(None, vec![]),             // Error 2
                player(Some(1.0), vec![Some(0)]), // Error 3
            ],
        };
        let errors = validate_card(&card, &Config::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
