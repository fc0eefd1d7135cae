use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(
    name = "plagcheck",
    version,
    about = "Directory-wide text similarity for plagiarism detection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP comparison service
    Serve(ServeArgs),
    /// Compare a file against every file in a folder
    ///
    /// Scores are directional: each is the share of that folder file's text
    /// found in the reference, not the other way round.
    Compare(CompareArgs),
    /// Score one candidate file against one reference file
    Score(ScoreArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port [default: 8080]
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Max concurrent scoring tasks per request [default: CPU count]
    #[arg(long)]
    pub workers: Option<usize>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct CompareArgs {
    /// Reference file
    pub file: String,

    /// Folder whose regular files are compared against the reference
    pub folder: String,

    /// Print the JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Highlight scores at or above this percentage
    #[arg(long, default_value = "80")]
    pub threshold: f64,

    /// Max concurrent scoring tasks [default: CPU count]
    #[arg(long)]
    pub workers: Option<usize>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ScoreArgs {
    /// Reference file
    pub reference: String,

    /// Candidate file; the score is measured over its length
    pub candidate: String,

    /// Also print the classified diff spans
    #[arg(long)]
    pub diff: bool,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
