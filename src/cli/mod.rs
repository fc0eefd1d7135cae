pub mod commands;
pub mod compare;
pub mod score;
pub mod serve;

pub use commands::{Cli, Commands};
