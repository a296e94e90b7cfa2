pub mod formatter;

pub use formatter::{
    format_age, format_band, format_drivers, format_fields, format_overview, format_ranked_table,
    format_score_result, format_summary, format_tsv, should_use_colors,
};
