//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_cafe_stats, print_check_result, print_expand_summary, print_generate_report,
    print_schedule, print_score_result, print_upcoming,
};
