use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single hole
    Hole {
        /// Par of the hole
        #[arg(long)]
        par: u32,

        /// Stroke index for the first allocation round
        #[arg(long)]
        index1: u32,

        /// Stroke index for the second round (0 disables)
        #[arg(long, default_value_t = 0)]
        index2: u32,

        /// Stroke index for the third round (0 disables)
        #[arg(long, default_value_t = 0)]
        index3: u32,

        /// Course handicap (defaults to the config handicap)
        #[arg(long, allow_hyphen_values = true)]
        handicap: Option<f64>,

        /// Gross strokes played
        #[arg(long)]
        strokes: u32,
    },
    /// Score every player on a YAML scorecard
    Card {
        /// Path to the scorecard file
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "hole-scorer")]
#[command(about = "Handicap-adjusted hole scoring: net par, par/stroke differentials, Stableford", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/hole-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match hole_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded config: {} courses, default handicap {}",
            config.courses.len(),
            config
                .handicap
                .map(hole_scorer::output::format_points)
                .unwrap_or_else(|| "(none)".to_string())
        );
    }

    let use_colors = hole_scorer::output::should_use_colors();

    match cli.command {
        Commands::Hole {
            par,
            index1,
            index2,
            index3,
            handicap,
            strokes,
        } => {
            let hole = hole_scorer::scoring::HoleStrokeAllocation::new(par, index1, index2, index3);

            let Some(handicap) = handicap.or(config.handicap) else {
                eprintln!("No handicap given. Pass --handicap or set 'handicap' in the config file.");
                std::process::exit(EXIT_INPUT);
            };

            let mut errors = hole_scorer::scoring::validate_hole("hole", &hole);
            if !handicap.is_finite() {
                errors.push("hole.handicap: must be a finite number".to_string());
            }
            if strokes == 0 {
                errors.push("hole.strokes: must be positive".to_string());
            } else if strokes > hole_scorer::scoring::MAX_HOLE_STROKES {
                errors.push(format!(
                    "hole.strokes: {} exceeds the maximum of {}",
                    strokes,
                    hole_scorer::scoring::MAX_HOLE_STROKES
                ));
            }
            if !errors.is_empty() {
                eprintln!("Input errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }

            if cli.verbose {
                eprintln!(
                    "Allocated strokes: {}",
                    hole_scorer::scoring::allocated_strokes(&hole, handicap)
                );
            }

            let score = hole_scorer::scoring::score_hole(&hole, handicap, strokes);
            match cli.format {
                OutputFormat::Table => {
                    println!(
                        "{}",
                        hole_scorer::output::format_hole_detail(&hole, handicap, &score, use_colors)
                    );
                }
                OutputFormat::Tsv => {
                    println!(
                        "{}\t{}\t{}\t{}",
                        hole_scorer::output::format_points(score.net_par),
                        hole_scorer::output::format_signed(score.par_score),
                        hole_scorer::output::format_signed(score.stroke_score),
                        hole_scorer::output::format_points(score.stableford)
                    );
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&score) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Commands::Card { path } => {
            let card = match hole_scorer::card::load_card(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Scorecard error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            // Validate the whole card up front
            if let Err(errors) = hole_scorer::scoring::validate_card(&card, &config) {
                eprintln!("Scorecard errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }

            let holes = match hole_scorer::card::resolve_holes(&card, &config) {
                Ok(h) => h,
                Err(e) => {
                    eprintln!("Scorecard error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Scoring {} players over {} holes from {}",
                    card.players.len(),
                    holes.len(),
                    path.display()
                );
            }

            let results = hole_scorer::card::score_card(&card, holes, config.handicap);

            match cli.format {
                OutputFormat::Table => {
                    let tables: Vec<String> = results
                        .iter()
                        .map(|r| hole_scorer::output::format_round_table(r, use_colors))
                        .collect();
                    println!("{}", tables.join("\n\n"));
                }
                OutputFormat::Tsv => {
                    for result in &results {
                        println!("{}", hole_scorer::output::format_round_tsv(result));
                    }
                }
                OutputFormat::Json => match hole_scorer::output::format_json(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
