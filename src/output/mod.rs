pub mod formatter;

pub use formatter::{
    format_hole_detail, format_json, format_points, format_round_table, format_round_tsv,
    format_signed, should_use_colors,
};
