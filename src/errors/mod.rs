pub mod types;

pub use types::PlagError;
