use std::path::Path;
use crate::cli::commands::ScoreArgs;
use crate::compare::read_document;
use crate::config;
use crate::errors::PlagError;
use crate::reporting;
use crate::similarity::Scorer;

pub async fn handle_score(args: ScoreArgs, quiet: bool) -> Result<(), PlagError> {
    let config = config::load_config(args.config.as_deref().map(Path::new)).await?;
    let max_bytes = config.scoring.max_file_bytes;

    let reference = read_document(Path::new(&args.reference), max_bytes).await?;
    let candidate = read_document(Path::new(&args.candidate), max_bytes).await?;
    let scorer = Scorer::from_config(&config.scoring);

    let show_diff = args.diff;
    let (breakdown, spans) = tokio::task::spawn_blocking(move || {
        let breakdown = scorer.breakdown(&reference, &candidate);
        let spans = show_diff.then(|| scorer.diff(&reference, &candidate));
        (breakdown, spans)
    })
    .await
    .map_err(|e| PlagError::Internal(format!("Scoring task failed: {}", e)))?;

    if quiet {
        println!("{:.2}", breakdown.score);
    } else {
        println!("{}", reporting::format_breakdown(&breakdown));
    }
    if let Some(spans) = spans {
        println!();
        println!("{}", reporting::format_spans(&spans));
    }
    Ok(())
}
