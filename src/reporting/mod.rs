pub mod formatter;

pub use formatter::{
    format_breakdown, format_results_json, format_results_table, format_spans, format_summary,
};
