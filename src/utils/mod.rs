pub mod formatting;

pub use formatting::{format_chars, format_percent};
